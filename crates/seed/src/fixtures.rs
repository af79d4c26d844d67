//! Embedded demo records and the text templates derived from them.
//!
//! Records are loaded in declaration order. Cross references (skill names,
//! category names, employer emails) are resolved by natural key at load
//! time, so a typo here surfaces as a logged missing reference.

use workbridge_core::experience::ExperienceLevel;
use workbridge_core::jobs::JobType;
use workbridge_core::skills::SkillCategory;
use workbridge_core::types::Amount;

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct CategoryFixture {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillFixture {
    pub name: &'static str,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy)]
pub struct SeekerFixture {
    pub email: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub phone: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub experience_years: u32,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct EmployerFixture {
    pub email: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub company_name: &'static str,
    pub industry: &'static str,
    pub city: &'static str,
    pub state: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct JobFixture {
    pub title: &'static str,
    pub category: &'static str,
    pub company_email: &'static str,
    pub description: &'static str,
    pub requirements: &'static str,
    /// `"City, State"`.
    pub location: &'static str,
    pub salary_min: Amount,
    pub salary_max: Amount,
    pub job_type: JobType,
    pub experience_required: u32,
    pub skills: &'static [&'static str],
}

/// The records one loader run works through, phase by phase.
#[derive(Debug, Clone, Copy)]
pub struct FixtureSet {
    pub categories: &'static [CategoryFixture],
    pub skills: &'static [SkillFixture],
    pub seekers: &'static [SeekerFixture],
    pub employers: &'static [EmployerFixture],
    pub jobs: &'static [JobFixture],
}

impl FixtureSet {
    /// The embedded demo data set.
    pub const BUILTIN: Self = Self {
        categories: CATEGORIES,
        skills: SKILLS,
        seekers: SEEKERS,
        employers: EMPLOYERS,
        jobs: JOBS,
    };
}

impl Default for FixtureSet {
    fn default() -> Self {
        Self::BUILTIN
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub const CATEGORIES: &[CategoryFixture] = &[
    CategoryFixture {
        name: "Construction",
        description: "Building, renovation, and construction work",
        icon: "construction",
    },
    CategoryFixture {
        name: "Manufacturing",
        description: "Factory work, assembly, and production",
        icon: "factory",
    },
    CategoryFixture {
        name: "Transportation",
        description: "Driving, delivery, and logistics",
        icon: "truck",
    },
    CategoryFixture {
        name: "Hospitality",
        description: "Hotels, restaurants, and food service",
        icon: "restaurant",
    },
    CategoryFixture {
        name: "Maintenance",
        description: "Repair, cleaning, and facility maintenance",
        icon: "tools",
    },
    CategoryFixture {
        name: "Security",
        description: "Security guards and safety personnel",
        icon: "security",
    },
    CategoryFixture {
        name: "Retail",
        description: "Sales, customer service, and retail operations",
        icon: "store",
    },
    CategoryFixture {
        name: "Healthcare Support",
        description: "Healthcare assistants and support staff",
        icon: "medical",
    },
];

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

const fn skill(name: &'static str, category: SkillCategory) -> SkillFixture {
    SkillFixture { name, category }
}

pub const SKILLS: &[SkillFixture] = &[
    skill("Carpentry", SkillCategory::Construction),
    skill("Plumbing", SkillCategory::Construction),
    skill("Electrical Work", SkillCategory::Construction),
    skill("Welding", SkillCategory::Construction),
    skill("Masonry", SkillCategory::Construction),
    skill("Painting", SkillCategory::Construction),
    skill("Roofing", SkillCategory::Construction),
    skill("Heavy Equipment Operation", SkillCategory::Construction),
    skill("Assembly Line Work", SkillCategory::Manufacturing),
    skill("Quality Control", SkillCategory::Manufacturing),
    skill("Machine Operation", SkillCategory::Manufacturing),
    skill("Packaging", SkillCategory::Manufacturing),
    skill("Inventory Management", SkillCategory::Manufacturing),
    skill("Forklift Operation", SkillCategory::Manufacturing),
    skill("Commercial Driving", SkillCategory::Transportation),
    skill("Delivery Services", SkillCategory::Transportation),
    skill("Vehicle Maintenance", SkillCategory::Transportation),
    skill("Route Planning", SkillCategory::Transportation),
    skill("Loading/Unloading", SkillCategory::Transportation),
    skill("Food Preparation", SkillCategory::Hospitality),
    skill("Customer Service", SkillCategory::Hospitality),
    skill("Cleaning", SkillCategory::Hospitality),
    skill("Cash Handling", SkillCategory::Hospitality),
    skill("Food Safety", SkillCategory::Hospitality),
    skill("HVAC Repair", SkillCategory::Maintenance),
    skill("Janitorial Services", SkillCategory::Maintenance),
    skill("Landscaping", SkillCategory::Maintenance),
    skill("Equipment Repair", SkillCategory::Maintenance),
    skill("Security Monitoring", SkillCategory::Security),
    skill("Access Control", SkillCategory::Security),
    skill("Emergency Response", SkillCategory::Security),
    skill("Physical Fitness", SkillCategory::General),
    skill("Team Work", SkillCategory::General),
    skill("Time Management", SkillCategory::General),
    skill("Communication", SkillCategory::General),
    skill("Problem Solving", SkillCategory::General),
    skill("Safety Compliance", SkillCategory::General),
];

// ---------------------------------------------------------------------------
// Job seekers
// ---------------------------------------------------------------------------

pub const SEEKERS: &[SeekerFixture] = &[
    SeekerFixture {
        email: "rajesh.kumar@email.com",
        first_name: "Rajesh",
        last_name: "Kumar",
        phone: "+91-9876543210",
        city: "Mumbai",
        state: "Maharashtra",
        experience_years: 5,
        skills: &["Carpentry", "Painting", "Safety Compliance"],
    },
    SeekerFixture {
        email: "priya.sharma@email.com",
        first_name: "Priya",
        last_name: "Sharma",
        phone: "+91-9876543211",
        city: "Delhi",
        state: "Delhi",
        experience_years: 3,
        skills: &["Customer Service", "Cash Handling", "Food Safety"],
    },
    SeekerFixture {
        email: "amit.singh@email.com",
        first_name: "Amit",
        last_name: "Singh",
        phone: "+91-9876543212",
        city: "Bangalore",
        state: "Karnataka",
        experience_years: 7,
        skills: &["Commercial Driving", "Vehicle Maintenance", "Route Planning"],
    },
    SeekerFixture {
        email: "sunita.devi@email.com",
        first_name: "Sunita",
        last_name: "Devi",
        phone: "+91-9876543213",
        city: "Chennai",
        state: "Tamil Nadu",
        experience_years: 2,
        skills: &["Cleaning", "Janitorial Services", "Time Management"],
    },
    SeekerFixture {
        email: "ravi.patel@email.com",
        first_name: "Ravi",
        last_name: "Patel",
        phone: "+91-9876543214",
        city: "Ahmedabad",
        state: "Gujarat",
        experience_years: 8,
        skills: &["Welding", "Heavy Equipment Operation", "Safety Compliance"],
    },
    SeekerFixture {
        email: "meera.joshi@email.com",
        first_name: "Meera",
        last_name: "Joshi",
        phone: "+91-9876543215",
        city: "Pune",
        state: "Maharashtra",
        experience_years: 4,
        skills: &["Assembly Line Work", "Quality Control", "Team Work"],
    },
    SeekerFixture {
        email: "vikram.yadav@email.com",
        first_name: "Vikram",
        last_name: "Yadav",
        phone: "+91-9876543216",
        city: "Hyderabad",
        state: "Telangana",
        experience_years: 6,
        skills: &["Security Monitoring", "Emergency Response", "Communication"],
    },
    SeekerFixture {
        email: "kavita.reddy@email.com",
        first_name: "Kavita",
        last_name: "Reddy",
        phone: "+91-9876543217",
        city: "Kolkata",
        state: "West Bengal",
        experience_years: 3,
        skills: &["Food Preparation", "Customer Service", "Food Safety"],
    },
];

// ---------------------------------------------------------------------------
// Employers
// ---------------------------------------------------------------------------

pub const EMPLOYERS: &[EmployerFixture] = &[
    EmployerFixture {
        email: "hr@constructionplus.com",
        first_name: "Suresh",
        last_name: "Agarwal",
        company_name: "Construction Plus Pvt Ltd",
        industry: "construction",
        city: "Mumbai",
        state: "Maharashtra",
    },
    EmployerFixture {
        email: "jobs@quickdelivery.com",
        first_name: "Anita",
        last_name: "Gupta",
        company_name: "Quick Delivery Services",
        industry: "logistics",
        city: "Delhi",
        state: "Delhi",
    },
    EmployerFixture {
        email: "careers@techmanufacturing.com",
        first_name: "Ramesh",
        last_name: "Iyer",
        company_name: "Tech Manufacturing Ltd",
        industry: "manufacturing",
        city: "Bangalore",
        state: "Karnataka",
    },
    EmployerFixture {
        email: "hiring@grandhotel.com",
        first_name: "Deepa",
        last_name: "Nair",
        company_name: "Grand Hotel & Resorts",
        industry: "hospitality",
        city: "Chennai",
        state: "Tamil Nadu",
    },
    EmployerFixture {
        email: "recruitment@securitypro.com",
        first_name: "Manoj",
        last_name: "Thakur",
        company_name: "Security Pro Services",
        industry: "security",
        city: "Pune",
        state: "Maharashtra",
    },
];

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

pub const JOBS: &[JobFixture] = &[
    JobFixture {
        title: "Construction Worker - Residential Projects",
        category: "Construction",
        company_email: "hr@constructionplus.com",
        description: "We are looking for experienced construction workers for residential \
                      building projects. Must have experience in carpentry, painting, and \
                      general construction work.",
        requirements: "Minimum 2 years experience in construction, Physical fitness required, \
                       Safety certification preferred",
        location: "Mumbai, Maharashtra",
        salary_min: 25_000,
        salary_max: 35_000,
        job_type: JobType::FullTime,
        experience_required: 2,
        skills: &["Carpentry", "Painting", "Safety Compliance"],
    },
    JobFixture {
        title: "Delivery Driver - Two Wheeler",
        category: "Transportation",
        company_email: "jobs@quickdelivery.com",
        description: "Join our delivery team! We need reliable drivers with their own \
                      two-wheeler for food and package delivery across Delhi NCR.",
        requirements: "Valid driving license, Own two-wheeler, Good knowledge of Delhi roads, \
                       Smartphone required",
        location: "Delhi, Delhi",
        salary_min: 20_000,
        salary_max: 30_000,
        job_type: JobType::FullTime,
        experience_required: 1,
        skills: &["Commercial Driving", "Route Planning", "Customer Service"],
    },
    JobFixture {
        title: "Production Line Operator",
        category: "Manufacturing",
        company_email: "careers@techmanufacturing.com",
        description: "Operate production machinery and ensure quality standards in our \
                      electronics manufacturing facility. Training will be provided.",
        requirements: "12th pass minimum, Willingness to work in shifts, Basic technical \
                       aptitude, Team player",
        location: "Bangalore, Karnataka",
        salary_min: 18_000,
        salary_max: 25_000,
        job_type: JobType::FullTime,
        experience_required: 0,
        skills: &["Assembly Line Work", "Quality Control", "Machine Operation"],
    },
    JobFixture {
        title: "Hotel Housekeeping Staff",
        category: "Hospitality",
        company_email: "hiring@grandhotel.com",
        description: "Maintain cleanliness and hygiene standards in our 5-star hotel. \
                      Experience in hospitality sector preferred.",
        requirements: "Previous housekeeping experience, Attention to detail, Physical stamina, \
                       Good communication skills",
        location: "Chennai, Tamil Nadu",
        salary_min: 15_000,
        salary_max: 22_000,
        job_type: JobType::FullTime,
        experience_required: 1,
        skills: &["Cleaning", "Customer Service", "Time Management"],
    },
    JobFixture {
        title: "Security Guard - Night Shift",
        category: "Security",
        company_email: "recruitment@securitypro.com",
        description: "Provide security services for commercial buildings during night hours. \
                      Must be alert and responsible.",
        requirements: "Security training certificate, Physical fitness, No criminal background, \
                       Willing to work night shifts",
        location: "Pune, Maharashtra",
        salary_min: 16_000,
        salary_max: 20_000,
        job_type: JobType::FullTime,
        experience_required: 1,
        skills: &["Security Monitoring", "Emergency Response", "Communication"],
    },
    JobFixture {
        title: "Welder - Structural Steel",
        category: "Construction",
        company_email: "hr@constructionplus.com",
        description: "Experienced welder needed for structural steel work on commercial \
                      construction projects. Arc welding experience required.",
        requirements: "Certified welder, 3+ years experience, Ability to read blueprints, \
                       Safety conscious",
        location: "Mumbai, Maharashtra",
        salary_min: 30_000,
        salary_max: 45_000,
        job_type: JobType::FullTime,
        experience_required: 3,
        skills: &["Welding", "Safety Compliance", "Heavy Equipment Operation"],
    },
    JobFixture {
        title: "Restaurant Kitchen Helper",
        category: "Hospitality",
        company_email: "hiring@grandhotel.com",
        description: "Assist chefs in food preparation, maintain kitchen cleanliness, and \
                      support restaurant operations.",
        requirements: "Food handling knowledge, Willingness to work flexible hours, Team player, \
                       Basic English",
        location: "Chennai, Tamil Nadu",
        salary_min: 12_000,
        salary_max: 18_000,
        job_type: JobType::FullTime,
        experience_required: 0,
        skills: &["Food Preparation", "Cleaning", "Food Safety"],
    },
    JobFixture {
        title: "Forklift Operator",
        category: "Manufacturing",
        company_email: "careers@techmanufacturing.com",
        description: "Operate forklift for material handling in our warehouse. Forklift \
                      license required.",
        requirements: "Valid forklift license, 2+ years experience, Good spatial awareness, \
                       Safety focused",
        location: "Bangalore, Karnataka",
        salary_min: 22_000,
        salary_max: 28_000,
        job_type: JobType::FullTime,
        experience_required: 2,
        skills: &["Forklift Operation", "Inventory Management", "Safety Compliance"],
    },
    JobFixture {
        title: "Plumber - Residential & Commercial",
        category: "Maintenance",
        company_email: "hr@constructionplus.com",
        description: "Handle plumbing installations, repairs, and maintenance for residential \
                      and commercial properties.",
        requirements: "Plumbing certification, 3+ years experience, Own tools preferred, \
                       Problem-solving skills",
        location: "Mumbai, Maharashtra",
        salary_min: 25_000,
        salary_max: 40_000,
        job_type: JobType::FullTime,
        experience_required: 3,
        skills: &["Plumbing", "Problem Solving", "Customer Service"],
    },
    JobFixture {
        title: "Warehouse Packer",
        category: "Manufacturing",
        company_email: "careers@techmanufacturing.com",
        description: "Pack products according to specifications, maintain quality standards, \
                      and prepare shipments.",
        requirements: "Attention to detail, Physical stamina, Basic math skills, Reliable \
                       attendance",
        location: "Bangalore, Karnataka",
        salary_min: 15_000,
        salary_max: 20_000,
        job_type: JobType::FullTime,
        experience_required: 0,
        skills: &["Packaging", "Quality Control", "Time Management"],
    },
];

/// Days from seeding until a seeded job's application deadline.
pub const APPLICATION_DEADLINE_DAYS: i64 = 30;

// ---------------------------------------------------------------------------
// Derived text
// ---------------------------------------------------------------------------

pub fn skill_description(name: &str) -> String {
    format!("Professional skill in {}", name.to_lowercase())
}

pub fn seeker_bio(seeker: &SeekerFixture) -> String {
    format!(
        "Experienced {} with {} years in the field.",
        seeker.first_name, seeker.experience_years
    )
}

impl SeekerFixture {
    pub fn experience_level(&self) -> ExperienceLevel {
        ExperienceLevel::for_years(self.experience_years)
    }

    /// `"City, State"`.
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

impl JobFixture {
    pub fn experience_level(&self) -> ExperienceLevel {
        ExperienceLevel::for_years(self.experience_required)
    }

    /// City and state split out of `location`. State is empty when the
    /// location has no comma.
    pub fn city_and_state(&self) -> (&'static str, &'static str) {
        match self.location.split_once(',') {
            Some((city, state)) => (city.trim(), state.trim()),
            None => (self.location.trim(), ""),
        }
    }
}

pub fn company_description(employer: &EmployerFixture) -> String {
    format!(
        "{} is a leading company in {} sector.",
        employer.company_name, employer.industry
    )
}

/// Website derived from the company name: lower-cased with spaces,
/// ampersands and the `ltd`/`pvt` suffixes removed.
pub fn company_website(company_name: &str) -> String {
    let slug = company_name
        .to_lowercase()
        .replace(' ', "")
        .replace('&', "")
        .replace("ltd", "")
        .replace("pvt", "");
    format!("https://www.{slug}.com")
}

pub fn company_address(employer: &EmployerFixture) -> String {
    format!("Corporate Office, {}", employer.city)
}

pub fn cover_letter(
    job_title: &str,
    company_name: &str,
    experience_level: ExperienceLevel,
    applicant_name: &str,
) -> String {
    format!(
        "Dear Hiring Manager,\n\n\
         I am interested in the {job_title} position at {company_name}. \
         With my experience in {} level work, I believe I would be a great fit for this role.\n\n\
         Thank you for your consideration.\n\n\
         Best regards,\n\
         {applicant_name}",
        experience_level.as_str()
    )
}
