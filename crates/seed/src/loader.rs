//! Phase runner: categories, skills, seekers, employers, jobs, applications.
//!
//! Later phases resolve earlier rows by natural key, so the order is fixed.
//! A missing reference is logged and the record skipped; any other error
//! aborts the run.

use std::io::Write;

use chrono::{Duration, Utc};
use rand::Rng;
use sqlx::PgPool;
use workbridge_core::accounts::{CompanySize, UserRole};
use workbridge_core::applications::ApplicationStatus;
use workbridge_core::jobs::{JobStatus, SalaryType};
use workbridge_core::skills::{ProficiencyLevel, RequirementLevel};
use workbridge_core::validation::{
    validate_email, validate_max_len, validate_phone, validate_salary_range, JOB_TITLE_MAX_LEN,
    NAME_MAX_LEN,
};
use workbridge_db::models::application::{ChangeApplicationStatus, CreateJobApplication};
use workbridge_db::models::category::CreateJobCategory;
use workbridge_db::models::job::{CreateJob, CreateJobSkillRequirement};
use workbridge_db::models::profile::{CreateJobPosterProfile, CreateJobSeekerProfile};
use workbridge_db::models::skill::{CreateJobSeekerSkill, CreateSkill};
use workbridge_db::models::user::{CreateUser, User};
use workbridge_db::repositories::{
    JobApplicationRepo, JobCategoryRepo, JobPosterProfileRepo, JobRepo, JobSeekerProfileRepo,
    JobSeekerSkillRepo, JobSkillRequirementRepo, SkillRepo, UserRepo,
};

use crate::error::SeedError;
use crate::fixtures::{
    self, EmployerFixture, FixtureSet, JobFixture, SeekerFixture, APPLICATION_DEADLINE_DAYS,
};
use crate::password::hash_password;
use crate::progress::Progress;
use crate::sampling::{self, APPLYING_SEEKERS, CANDIDATE_JOBS};

/// Row counts per seeded table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowCounts {
    pub categories: i64,
    pub skills: i64,
    pub seekers: i64,
    pub employers: i64,
    pub jobs: i64,
    pub applications: i64,
}

impl RowCounts {
    /// Current totals in the database.
    pub async fn collect(pool: &PgPool) -> Result<Self, sqlx::Error> {
        Ok(Self {
            categories: JobCategoryRepo::count(pool).await?,
            skills: SkillRepo::count(pool).await?,
            seekers: JobSeekerProfileRepo::count(pool).await?,
            employers: JobPosterProfileRepo::count(pool).await?,
            jobs: JobRepo::count(pool).await?,
            applications: JobApplicationRepo::count(pool).await?,
        })
    }
}

/// Outcome of a loader run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Rows inserted by this run.
    pub created: RowCounts,
    /// Rows present after the run.
    pub totals: RowCounts,
}

/// Runs the seeding phases against one pool.
pub struct Loader<'a, R: Rng, W: Write> {
    pool: &'a PgPool,
    rng: R,
    progress: Progress<W>,
    demo_password: String,
    fixtures: FixtureSet,
    created: RowCounts,
}

impl<'a, R: Rng, W: Write> Loader<'a, R, W> {
    pub fn new(pool: &'a PgPool, rng: R, out: W, demo_password: impl Into<String>) -> Self {
        Self {
            pool,
            rng,
            progress: Progress::new(out),
            demo_password: demo_password.into(),
            fixtures: FixtureSet::BUILTIN,
            created: RowCounts::default(),
        }
    }

    /// Load `fixtures` instead of the embedded demo data.
    pub fn with_fixtures(mut self, fixtures: FixtureSet) -> Self {
        self.fixtures = fixtures;
        self
    }

    /// Run every phase in order and print the row-count summary.
    pub async fn run(&mut self) -> Result<SeedSummary, SeedError> {
        self.progress.line("Starting to populate sample data...")?;

        self.load_categories().await?;
        self.load_skills().await?;
        self.load_seekers().await?;
        self.load_employers().await?;
        self.load_jobs().await?;
        self.load_applications().await?;

        let totals = RowCounts::collect(self.pool).await?;
        self.print_summary(&totals)?;
        self.progress.line("Sample data population completed!")?;

        Ok(SeedSummary {
            created: self.created,
            totals,
        })
    }

    /// Consume the loader and return the progress sink.
    pub fn into_output(self) -> W {
        self.progress.into_inner()
    }

    // -----------------------------------------------------------------------
    // Phases
    // -----------------------------------------------------------------------

    async fn load_categories(&mut self) -> Result<(), SeedError> {
        self.progress.phase("Creating job categories")?;

        for fixture in self.fixtures.categories {
            validate_max_len("category name", fixture.name, NAME_MAX_LEN)?;
            let (category, created) =
                JobCategoryRepo::create_or_get(self.pool, fixture.name, |name| CreateJobCategory {
                    name: name.to_string(),
                    description: Some(fixture.description.to_string()),
                    icon: Some(fixture.icon.to_string()),
                    is_active: Some(true),
                })
                .await?;
            if created {
                self.created.categories += 1;
                self.progress.created("category", &category.name)?;
            }
        }

        tracing::info!(created = self.created.categories, "Categories loaded");
        Ok(())
    }

    async fn load_skills(&mut self) -> Result<(), SeedError> {
        self.progress.phase("Creating skills")?;

        for fixture in self.fixtures.skills {
            validate_max_len("skill name", fixture.name, NAME_MAX_LEN)?;
            let (skill, created) =
                SkillRepo::create_or_get(self.pool, fixture.name, |name| CreateSkill {
                    name: name.to_string(),
                    category: fixture.category,
                    description: Some(fixtures::skill_description(name)),
                    is_active: Some(true),
                })
                .await?;
            if created {
                self.created.skills += 1;
                self.progress.created("skill", &skill.name)?;
            }
        }

        tracing::info!(created = self.created.skills, "Skills loaded");
        Ok(())
    }

    async fn load_seekers(&mut self) -> Result<(), SeedError> {
        self.progress.phase("Creating job seekers")?;

        for fixture in self.fixtures.seekers {
            let (user, _) = self
                .user(
                    fixture.email,
                    fixture.first_name,
                    fixture.last_name,
                    UserRole::JobSeeker,
                    Some(fixture.phone),
                )
                .await?;

            let rng = &mut self.rng;
            let (profile, created) =
                JobSeekerProfileRepo::create_or_get(self.pool, user.id, |user_id| {
                    seeker_profile(fixture, user_id, rng)
                })
                .await?;

            for skill_name in fixture.skills {
                let Some(skill) = SkillRepo::find_by_name(self.pool, skill_name).await? else {
                    let err = SeedError::missing("skill", *skill_name);
                    tracing::warn!(error = %err, seeker = fixture.email, "Skipping seeker skill");
                    continue;
                };
                let input = CreateJobSeekerSkill {
                    job_seeker_id: profile.id,
                    skill_id: skill.id,
                    proficiency_level: ProficiencyLevel::Intermediate,
                    years_of_experience: sampling::skill_years(
                        &mut self.rng,
                        fixture.experience_years,
                    ),
                };
                JobSeekerSkillRepo::create_or_get(self.pool, &input).await?;
            }

            if created {
                self.created.seekers += 1;
                self.progress.created("job seeker", &user.full_name())?;
            }
        }

        tracing::info!(created = self.created.seekers, "Job seekers loaded");
        Ok(())
    }

    async fn load_employers(&mut self) -> Result<(), SeedError> {
        self.progress.phase("Creating job posters (employers)")?;

        for fixture in self.fixtures.employers {
            validate_max_len("company name", fixture.company_name, NAME_MAX_LEN)?;
            let (user, _) = self
                .user(
                    fixture.email,
                    fixture.first_name,
                    fixture.last_name,
                    UserRole::JobPoster,
                    None,
                )
                .await?;

            let rng = &mut self.rng;
            let (profile, created) =
                JobPosterProfileRepo::create_or_get(self.pool, user.id, |user_id| {
                    employer_profile(fixture, user_id, rng)
                })
                .await?;

            if created {
                self.created.employers += 1;
                self.progress.created("employer", &profile.company_name)?;
            }
        }

        tracing::info!(created = self.created.employers, "Employers loaded");
        Ok(())
    }

    async fn load_jobs(&mut self) -> Result<(), SeedError> {
        self.progress.phase("Creating job listings")?;

        for fixture in self.fixtures.jobs {
            match self.job(fixture).await {
                Ok(true) => {
                    self.created.jobs += 1;
                    self.progress.created("job", fixture.title)?;
                }
                Ok(false) => {}
                Err(err @ SeedError::MissingReference { .. }) => {
                    tracing::warn!(error = %err, job = fixture.title, "Skipping job");
                    self.progress.failed("job", fixture.title)?;
                }
                Err(err) => return Err(err),
            }
        }

        tracing::info!(created = self.created.jobs, "Jobs loaded");
        Ok(())
    }

    async fn load_applications(&mut self) -> Result<(), SeedError> {
        self.progress.phase("Creating job applications")?;

        let seekers = JobSeekerProfileRepo::list_first(self.pool, APPLYING_SEEKERS).await?;
        let jobs = JobRepo::list_recent(self.pool, Some(CANDIDATE_JOBS)).await?;
        let plan = sampling::plan_applications(&mut self.rng, seekers.len(), jobs.len());

        for planned in plan {
            let seeker = &seekers[planned.seeker];
            let job = &jobs[planned.job];

            if JobApplicationRepo::exists_for(self.pool, job.id, seeker.user_id).await? {
                continue;
            }

            let applicant = UserRepo::find_by_id(self.pool, seeker.user_id).await?;
            let company = JobPosterProfileRepo::find_by_id(self.pool, job.company_id).await?;
            let (Some(applicant), Some(company)) = (applicant, company) else {
                tracing::warn!(
                    job_id = job.id,
                    seeker_id = seeker.id,
                    "Skipping application with dangling owner"
                );
                continue;
            };

            let input = CreateJobApplication {
                job_id: job.id,
                applicant_id: applicant.id,
                job_seeker_profile_id: seeker.id,
                cover_letter: Some(fixtures::cover_letter(
                    &job.title,
                    &company.company_name,
                    seeker.experience_level,
                    &applicant.full_name(),
                )),
                applied_at: Some(Utc::now() - Duration::days(planned.days_ago)),
                ..Default::default()
            };
            let application = JobApplicationRepo::create(self.pool, &input).await?;

            if planned.status != ApplicationStatus::Pending {
                let change = ChangeApplicationStatus {
                    new_status: planned.status,
                    changed_by: job.posted_by,
                    notes: None,
                };
                JobApplicationRepo::change_status(self.pool, application.id, &change).await?;
            }
            self.created.applications += 1;
        }

        self.progress.line(&format!(
            "  + Created {} job applications",
            self.created.applications
        ))?;
        tracing::info!(created = self.created.applications, "Applications loaded");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Find or create a demo account. The password is hashed only when the
    /// account is new.
    async fn user(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        role: UserRole,
        phone: Option<&str>,
    ) -> Result<(User, bool), SeedError> {
        validate_email(email)?;
        if let Some(phone) = phone {
            validate_phone(phone)?;
        }
        let password = self.demo_password.as_str();
        UserRepo::create_or_get(self.pool, email, |email: &str| -> Result<CreateUser, SeedError> {
            Ok(CreateUser {
                email: email.to_string(),
                username: email.to_string(),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                password_hash: hash_password(password)?,
                role,
                phone_number: phone.map(str::to_string),
                is_verified: Some(true),
            })
        })
        .await
    }

    /// Find or create one job and its skill requirements. Returns `true`
    /// when the job was inserted.
    async fn job(&mut self, fixture: &JobFixture) -> Result<bool, SeedError> {
        let pool = self.pool;
        let poster = UserRepo::find_by_email(pool, fixture.company_email)
            .await?
            .ok_or_else(|| SeedError::missing("user", fixture.company_email))?;
        let company = JobPosterProfileRepo::find_by_user(pool, poster.id)
            .await?
            .ok_or_else(|| SeedError::missing("employer profile", fixture.company_email))?;
        let category = JobCategoryRepo::find_by_name(pool, fixture.category)
            .await?
            .ok_or_else(|| SeedError::missing("category", fixture.category))?;

        validate_max_len("title", fixture.title, JOB_TITLE_MAX_LEN)?;
        validate_salary_range(Some(fixture.salary_min), Some(fixture.salary_max))?;

        let rng = &mut self.rng;
        let (job, created) =
            JobRepo::create_or_get(pool, company.id, fixture.title, |company_id, title| {
                let (city, state) = fixture.city_and_state();
                CreateJob {
                    title: title.to_string(),
                    description: fixture.description.to_string(),
                    category_id: category.id,
                    posted_by: poster.id,
                    company_id,
                    job_type: fixture.job_type,
                    experience_level: fixture.experience_level(),
                    location: fixture.location.to_string(),
                    city: city.to_string(),
                    state: state.to_string(),
                    salary_min: Some(fixture.salary_min),
                    salary_max: Some(fixture.salary_max),
                    salary_type: SalaryType::Monthly,
                    requirements: Some(fixture.requirements.to_string()),
                    application_deadline: Some(
                        Utc::now() + Duration::days(APPLICATION_DEADLINE_DAYS),
                    ),
                    status: JobStatus::Active,
                    is_featured: sampling::featured(rng),
                    ..Default::default()
                }
            })
            .await?;

        for skill_name in fixture.skills {
            let Some(skill) = SkillRepo::find_by_name(pool, skill_name).await? else {
                let err = SeedError::missing("skill", *skill_name);
                tracing::warn!(error = %err, job = fixture.title, "Skipping skill requirement");
                continue;
            };
            let input = CreateJobSkillRequirement {
                job_id: job.id,
                skill_id: skill.id,
                requirement_level: RequirementLevel::Required,
                min_experience_years: 0,
            };
            JobSkillRequirementRepo::create_or_get(pool, &input).await?;
        }

        Ok(created)
    }

    fn print_summary(&mut self, totals: &RowCounts) -> Result<(), SeedError> {
        self.progress.line("")?;
        self.progress.line("Database Summary:")?;
        for (label, count) in [
            ("Job Categories", totals.categories),
            ("Skills", totals.skills),
            ("Job Seekers", totals.seekers),
            ("Employers", totals.employers),
            ("Job Listings", totals.jobs),
            ("Applications", totals.applications),
        ] {
            self.progress.line(&format!("  - {label}: {count}"))?;
        }
        Ok(())
    }
}

fn seeker_profile<R: Rng + ?Sized>(
    fixture: &SeekerFixture,
    user_id: i64,
    rng: &mut R,
) -> CreateJobSeekerProfile {
    let (salary_min, salary_max) = sampling::expected_salary(rng);
    CreateJobSeekerProfile {
        user_id,
        bio: Some(fixtures::seeker_bio(fixture)),
        experience_level: fixture.experience_level(),
        location: Some(fixture.location()),
        city: Some(fixture.city.to_string()),
        state: Some(fixture.state.to_string()),
        pincode: Some(sampling::pincode(rng)),
        availability: Some(true),
        expected_salary_min: Some(salary_min),
        expected_salary_max: Some(salary_max),
        ..Default::default()
    }
}

fn employer_profile<R: Rng + ?Sized>(
    fixture: &EmployerFixture,
    user_id: i64,
    rng: &mut R,
) -> CreateJobPosterProfile {
    CreateJobPosterProfile {
        user_id,
        company_name: fixture.company_name.to_string(),
        company_description: Some(fixtures::company_description(fixture)),
        company_size: Some(CompanySize::Medium),
        industry: Some(fixture.industry.to_string()),
        website: Some(fixtures::company_website(fixture.company_name)),
        address: Some(fixtures::company_address(fixture)),
        city: Some(fixture.city.to_string()),
        state: Some(fixture.state.to_string()),
        pincode: Some(sampling::pincode(rng)),
        contact_phone: Some(sampling::contact_phone(rng)),
        is_company_verified: Some(true),
        ..Default::default()
    }
}
