//! Application pipeline vocabularies: statuses, interviews, messages,
//! offers and feedback.

use crate::choice::define_choice_enum;

define_choice_enum! {
    /// Where an application sits in the hiring pipeline.
    #[derive(Default)]
    ApplicationStatus {
        #[default]
        Pending => "pending",
        UnderReview => "under_review",
        Shortlisted => "shortlisted",
        InterviewScheduled => "interview_scheduled",
        Interviewed => "interviewed",
        Selected => "selected",
        Rejected => "rejected",
        Withdrawn => "withdrawn",
    }
}

define_choice_enum! {
    /// Interview format.
    #[derive(Default)]
    InterviewType {
        Phone => "phone",
        Video => "video",
        #[default]
        InPerson => "in_person",
        Group => "group",
        Technical => "technical",
    }
}

define_choice_enum! {
    /// Interview scheduling status.
    #[derive(Default)]
    InterviewStatus {
        #[default]
        Scheduled => "scheduled",
        Completed => "completed",
        Cancelled => "cancelled",
        Rescheduled => "rescheduled",
        NoShow => "no_show",
    }
}

define_choice_enum! {
    /// Interviewer's hiring recommendation.
    Recommendation {
        StronglyRecommend => "strongly_recommend",
        Recommend => "recommend",
        Neutral => "neutral",
        NotRecommend => "not_recommend",
        StronglyNotRecommend => "strongly_not_recommend",
    }
}

define_choice_enum! {
    /// Purpose of a message exchanged on an application.
    #[derive(Default)]
    MessageType {
        #[default]
        General => "general",
        InterviewInvite => "interview_invite",
        StatusUpdate => "status_update",
        Rejection => "rejection",
        Offer => "offer",
        FollowUp => "follow_up",
    }
}

define_choice_enum! {
    /// Candidate response state of a job offer.
    #[derive(Default)]
    OfferStatus {
        #[default]
        Pending => "pending",
        Accepted => "accepted",
        Rejected => "rejected",
        Negotiating => "negotiating",
        Expired => "expired",
        Withdrawn => "withdrawn",
    }
}

define_choice_enum! {
    /// Direction of a feedback entry.
    FeedbackType {
        EmployerToCandidate => "employer_to_candidate",
        CandidateToEmployer => "candidate_to_employer",
        PlatformFeedback => "platform_feedback",
    }
}

impl OfferStatus {
    /// Statuses that record the candidate's answer and stamp `responded_at`.
    pub fn is_candidate_response(self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected | Self::Negotiating)
    }
}
