// The MSNA questionnaire: the questions shown on the dashboard and the options of
// the questions with multiple answers.
//
// Column names are the verbatim question texts of the export, typos included.

pub const SEX: &str = "What is your sex?";
pub const AGE_GROUP: &str = "Age_grp";
pub const CITIZENSHIP: &str = "What is your citizenship?";
pub const LEGAL_STATUS: &str = "What is your current status (e.g., refugee, asylum seeker, etc.)?";
pub const ETHNICITY: &str = "Please specify what ethnic minority group";
pub const ACCOMMODATION: &str = "Do you currently live in a city or a village?";

pub const HOUSEHOLD_SIZE: &str = "How many members are in your household, including you?";
pub const HOUSEHOLD_CHILDREN: &str = "Of these, how many are children under 18?";
pub const HOUSEHOLD_ELDERLY: &str = "Of these, how many are senior citizens, aged over 60?";
pub const AGE: &str = "What is your age?";

pub const ACCESSED_HEALTHCARE: &str = "Were you able to access the healthcare service you needed?";
pub const HEALTHCARE_PROBLEMS: &str = "What prevented you from receiving the service?";

/// A demographic question used to select respondents.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Facet {
    pub column: &'static str,
    pub label: &'static str,
}

pub const FACETS: &[Facet] = &[
    Facet {
        column: SEX,
        label: "Gender",
    },
    Facet {
        column: AGE_GROUP,
        label: "Age_group",
    },
    Facet {
        column: CITIZENSHIP,
        label: "Nationality",
    },
    Facet {
        column: LEGAL_STATUS,
        label: "Legal Status",
    },
    Facet {
        column: ETHNICITY,
        label: "Ethnicity",
    },
    Facet {
        column: ACCOMMODATION,
        label: "Accomodation",
    },
];

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ChartKind {
    /// Share of each answer of a single-answer question.
    Pie,
    /// Distribution of a numeric answer.
    Histogram,
    /// Tally of the options of a "select all that apply" question.
    MultiAnswer(&'static [&'static str]),
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct ChartDefinition {
    pub kind: ChartKind,
    pub column: &'static str,
    pub title: &'static str,
}

const fn pie(column: &'static str, title: &'static str) -> ChartDefinition {
    ChartDefinition {
        kind: ChartKind::Pie,
        column,
        title,
    }
}

const fn histogram(column: &'static str, title: &'static str) -> ChartDefinition {
    ChartDefinition {
        kind: ChartKind::Histogram,
        column,
        title,
    }
}

const fn multi(
    column: &'static str,
    catalog: &'static [&'static str],
    title: &'static str,
) -> ChartDefinition {
    ChartDefinition {
        kind: ChartKind::MultiAnswer(catalog),
        column,
        title,
    }
}

// ******** Option catalogs ********
// Options are listed in the order of the questionnaire.

pub const NATIONALITY_OPTIONS: &[&str] =
    &["Ukraine", "Moldova", "Romania", "Prefer not to say", "Other"];

pub const ACCESS_PREVENTIVE_OPTIONS: &[&str] = &[
    "No difficulties",
    "Limited availability",
    "Lack of information",
    "High costs",
    "Long wait times",
    "Prefer not to say",
    "Other",
];

pub const ACCESS_REPRODUCTIVE_OPTIONS: &[&str] = &[
    "No difficulties",
    "Limited availability",
    "Lack of specialists",
    "Cultural barriers",
    "High costs",
    "Prefer not to say",
    "Other",
];

pub const ACCESS_MEDICINE_OPTIONS: &[&str] = &[
    "No difficulties",
    "Unavailable medications",
    "High costs",
    "Prescription issues",
    "Language barriers in understanding instructions",
    "Prefer not to say",
    "Other",
];

pub const INFO_SOURCES_OPTIONS: &[&str] = &[
    "Friends and relatives",
    "Internet/Mass Media",
    "Family doctor",
    "Prefer not to say",
    "Other (please specify)",
];

pub const HEALTH_TOPICS_OPTIONS: &[&str] = &[
    "How to care for the health of older citizens",
    "How to care for the health of children",
    "Information on prevention and treatment of sexually transmitted diseases",
    "Information on prevention of chronic diseases",
    "Information on vaccination and access to vaccines",
    "How to care for family members with chronic diseases",
    "Myths and realities regarding health",
    "How to select adequate health sources",
    "Prefer not to say",
    "None of the above",
];

pub const HEALTHCARE_GAPS_OPTIONS: &[&str] = &[
    "Administrative barriers and bureaucracy",
    "Lack of family doctors in the area",
    "Lack of specialized doctors in the area",
    "Lack of laboratories or diagnostic imaging services",
    "No preventive care being offered",
    "Prefer not to say",
    "Other (please specify)",
];

pub const SAFETY_CONCERN_OPTIONS: &[&str] = &[
    "None",
    "Physical threats or violence",
    "Verbal harassment or intimidation",
    "Theft or robbery",
    "Unsafe living conditions",
    "Limited access to health services",
    "Prefer not to say",
    "Other (please specify)",
];

pub const SAFETY_SUPPORT_OPTIONS: &[&str] = &[
    "Police",
    "Local authorities",
    "NGOs or humanitarian organizations",
    "Community leaders",
    "Friends or family",
    "Refugee support center",
    "Prefer not to say",
    "Other (please specify)",
];

pub const MOST_VULNERABLE_OPTIONS: &[&str] = &[
    "Children (under 18)",
    "Elderly (over 60)",
    "People with disabilities",
    "Single parents/caregivers",
    "Unaccompanied minors",
    "Ethnic or religious minorities",
    "Survivors of violence or torture",
    "People with chronic illnesses (physical or mental)",
    "Women and girls",
    "Persons dealing with substance abuse",
    "LGBTQ+ individuals",
    "Prefer not to say",
    "Other (please specify)",
];

pub const WOMEN_RISKS_OPTIONS: &[&str] = &[
    "Limited access to employment opportunities",
    "Balancing childcare responsibilities with work or education",
    "Gender-based violence or harassment",
    "Limited access to healthcare, including reproductive health services",
    "Social isolation and lack of community support",
    "Difficulties in accessing education or skill development programs",
    "Prefer not to say",
    "Other (please specify)",
];

pub const MEN_RISKS_OPTIONS: &[&str] = &[
    "Finding employment opportunities",
    "Accessing healthcare services",
    "Coping with psychological stress and trauma",
    "Legal issues (documentation, residency permits, etc.)",
    "Language barriers",
    "Separation from family members",
    "Prefer not to say",
    "Other (please specify)",
];

pub const CHILDREN_CHALLENGES_OPTIONS: &[&str] = &[
    "Disruption of education",
    "Psychological trauma and stress",
    "Difficulty integrating into a new environment",
    "Language barriers",
    "Health and nutrition issues",
    "Loss of sense of security and stability",
    "Prefer not to say",
    "Other",
];

pub const SUPPORT_SYSTEM_OPTIONS: &[&str] = &[
    "Family",
    "Friends",
    "Community - online support groups",
    "Community - offline support groups",
    "Prefer not to say",
    "Other",
];

pub const GBV_HELP_OPTIONS: &[&str] = &[
    "Police",
    "Hotline",
    "Shelter for survivors",
    "No",
    "Prefer not to answer",
    "Other",
];

pub const GBV_INFORMATION_OPTIONS: &[&str] = &[
    "Health",
    "Shelter",
    "Psychological support",
    "Legal assistance",
    "Socio-Economic reintegration",
    "No",
    "Other",
];

pub const CHILD_PROTECTION_INFORMATION_OPTIONS: &[&str] =
    &["Psychological support", "Legal assistance", "No", "Other"];

pub const MHPSS_USED_OPTIONS: &[&str] = &[
    "No",
    "Individual counseling sessions",
    "Group therapy or support groups",
    "Stress reduction and relaxation techniques",
    "Cultural adaptation and integration support",
    "Community-building activities and social events",
    "Educational workshops on mental health and well-being",
    "Crisis hotline or emergency mental health services",
    "Family counseling",
    "I don't know/Not sure",
    "Prefer not to say",
    "Other (please specify)",
];

pub const MHPSS_PROVIDER_OPTIONS: &[&str] = &[
    "Government health services",
    "International NGO",
    "Local NGO",
    "Private practitioner",
    "Remote services from Ukraine",
    "Religious organization",
    "Prefer not to say",
    "Other (please specify)",
];

pub const MHPSS_HELPFUL_OPTIONS: &[&str] = &[
    "Individual counseling sessions",
    "Group therapy or support groups",
    "Stress reduction and relaxation techniques",
    "Cultural adaptation and integration support",
    "Community-building activities and social events",
    "Educational workshops on mental health and well-being",
    "Crisis hotline or emergency mental health services",
    "Family counseling",
    "Prefer not to say",
    "Other",
];

pub const EDUCATION_SUPPORT_OPTIONS: &[&str] = &[
    "Language classes",
    "Tutoring",
    "Psychological support",
    "Extracurricular activities",
    "None",
    "Prefer not to say",
    "Other",
];

pub const JOB_CHALLENGES_OPTIONS: &[&str] = &[
    "No difficulties",
    "Language barriers",
    "Lack of recognition of qualifications or work experience",
    "Discrimination or prejudice from employers",
    "Lack of professional networks or connections",
    "Difficulty obtaining necessary work permits or documentation",
    "Cultural differences in workplace norms and expectations",
    "Prefer not to say",
    "Other (please specify)",
];

pub const JOB_SUPPORT_OPTIONS: &[&str] = &[
    "Language training specific to job-related terminology",
    "Vocational training or skill development programs",
    "Job search workshops (resume writing, interview skills)",
    "Job placement services or employment agencies",
    "Assistance with credential recognition and skill certification",
    "Entrepreneurship support and small business development programs",
    "Prefer not to say",
    "Other (please specify)",
];

pub const FUTURE_CONCERNS_OPTIONS: &[&str] = &[
    "Uncertainty about the future / lack of long-term stability",
    "Financial insecurity / difficulty making ends meet",
    "Limited employment opportunities",
    "Inadequate or temporary housing conditions",
    "Separation from family members",
    "Difficulties with language and communication",
    "Concerns about legal status or documentation",
    "Lack of social integration / feeling isolated",
    "Prefer not to say",
    "Other (please specify)",
];

pub const URGENT_NEEDS_OPTIONS: &[&str] = &[
    "Affordable and stable housing",
    "Access to healthcare services",
    "Employment opportunities",
    "Legal assistance and documentation support",
    "Education for children and youth",
    "Mental health and psychosocial support",
    "Financial assistance",
    "Integration support and community connections",
    "Prefer not to say",
    "Other (please specify)",
];

pub const FUTURE_PLANS_OPTIONS: &[&str] = &[
    "Return to Ukraine as soon as possible",
    "Stay in Moldova until it's safe to return to Ukraine",
    "Relocate to another country to join family/contacts",
    "Stay in Moldova long-term, regardless of the war",
    "Undecided / Don't know yet",
    "Prefer not to say",
    "Other (please specify)",
];

/// Used with an exact match on the comma- or semicolon-separated answers.
pub const HEALTHCARE_PROBLEMS_OPTIONS: &[&str] = &[
    "Discrimination",
    "Long waiting times",
    "Lack of information about available services",
    "Lack of necessary documentation",
    "Lack of specialized services",
    "Transportation issues",
    "Cost of services",
    "Language barriers",
    "Prefer not to say",
    "Other (please specify)",
];

/// The charts of the dashboard, in display order.
///
/// All these questions are expected in the export.
pub const CHARTS: &[ChartDefinition] = &[
    histogram(AGE, "Age Distribution"),
    pie(AGE_GROUP, "Age Distribution"),
    multi(CITIZENSHIP, NATIONALITY_OPTIONS, "Citizenship Distribution"),
    pie(ETHNICITY, "Ethnicity Distribution"),
    histogram(HOUSEHOLD_SIZE, "Household Size Distribution"),
    pie(
        "Are there other members in the household that have a lot of difficulty or cannot do any one of these actions?",
        "Household Difficulty",
    ),
    multi(
        "Preventive health services (e.g., vaccinations, health screenings)?",
        ACCESS_PREVENTIVE_OPTIONS,
        "Difficulties in Accessing Preventive Health Services",
    ),
    multi(
        "Reproductive health services and or pre and postnatal care?",
        ACCESS_REPRODUCTIVE_OPTIONS,
        "Difficulties in Accessing Reproductive Health Services",
    ),
    multi(
        "Necessary medications?",
        ACCESS_MEDICINE_OPTIONS,
        "Difficulties in Accessing Necessary Medications",
    ),
    pie(
        "How do you usually obtain the medications you need in Moldova?",
        "How Medications are Procured",
    ),
    pie(
        "Do you have any form of health insurance coverage in Moldova?",
        "Health Insurance Coverage",
    ),
    pie(
        "If not, has this affected your ability to access health services?",
        "Impact of No Health Insurance on Access",
    ),
    multi(
        "Where do you typically get health-related information?",
        INFO_SOURCES_OPTIONS,
        "Sources of Health-Related Information",
    ),
    pie(
        "Do you feel that you receive health information from accurate and reliable sources?",
        "Reliability of Health Information Sources",
    ),
    multi(
        "What health topics would you like to receive more information about?",
        HEALTH_TOPICS_OPTIONS,
        "Desired Health Information Topics",
    ),
    multi(
        "In your opinion, what are the biggest gaps in the provision of healthcare services in Moldova?",
        HEALTHCARE_GAPS_OPTIONS,
        "Biggest Gaps in Healthcare Services",
    ),
    pie(
        "How satisfied are you in general with the medical system in Moldova?",
        "Satisfaction with Medical System",
    ),
    multi(
        "Have you or members of your household faced any safety and security concerns since arriving in Moldova?",
        SAFETY_CONCERN_OPTIONS,
        "Safety and Security Concerns",
    ),
    multi(
        "Where would you go to seek support in case of safety concerns? (Select all that apply)",
        SAFETY_SUPPORT_OPTIONS,
        "Support Systems for Safety Concerns",
    ),
    pie(
        "During your stay in Moldova, have you or your family members experienced any forms of discrimination?",
        "Experience of Discrimination",
    ),
    multi(
        "In your opinion, which groups among refugees are the most vulnerable?",
        MOST_VULNERABLE_OPTIONS,
        "Most Vulnerable Groups",
    ),
    multi(
        "What do you think are the main protection risks that refugee women face?",
        WOMEN_RISKS_OPTIONS,
        "Main Protection Risks for Women",
    ),
    multi(
        "What are the main protection risks that refugee men face?",
        MEN_RISKS_OPTIONS,
        "Main Protection Risks for Men",
    ),
    multi(
        "What do you think is the main challenge that refugee children are facing?",
        CHILDREN_CHALLENGES_OPTIONS,
        "Main Challenges for Children",
    ),
    multi(
        "What is your usual suppport system, to whom do you refer when you are faced with hardships?",
        SUPPORT_SYSTEM_OPTIONS,
        "Usual Support System",
    ),
    pie(
        "Are you aware of any incidents of gender-based violence among refugees in your community in Moldova?",
        "Awareness of Gender-Based Violence Cases",
    ),
    multi(
        "Do you know where could a woman or young girl go for help in case of violence?",
        GBV_HELP_OPTIONS,
        "Knowledge of Support for GBV",
    ),
    multi(
        "Would you need more information about existing services for women affected by Violence?",
        GBV_INFORMATION_OPTIONS,
        "Need More Information on GBV Services",
    ),
    multi(
        "Would you need more information about existing child protection services?",
        CHILD_PROTECTION_INFORMATION_OPTIONS,
        "Need More Information on Child Protection Services",
    ),
    multi(
        "Have you or members of your household, accessed any mental health or psychosocial support services in Moldova?",
        MHPSS_USED_OPTIONS,
        "Accessed MHPSS Services",
    ),
    multi(
        "From which source did you or your family members receive mental health and psychosocial support services?",
        MHPSS_PROVIDER_OPTIONS,
        "MHPSS Providers",
    ),
    pie(
        "Are you satisfied with the quality of services received?",
        "Satisfaction with MHPSS Services",
    ),
    multi(
        "What type of psychosocial support do you think might be most helpful for the refugee community?",
        MHPSS_HELPFUL_OPTIONS,
        "Helpful MHPSS Services",
    ),
    pie(
        "Are your children currently attending school?",
        "Children Attending School",
    ),
    multi(
        "What additional support do you think children from the refugee community might need to succeed in school?",
        EDUCATION_SUPPORT_OPTIONS,
        "Educational Support Needed",
    ),
    pie(
        "What are your thoughts on the impacts of online schooling on children?",
        "Impact of Online Schooling on Children",
    ),
    pie(
        "Have you attempted to find employment in Moldova?",
        "Attempted to Find Employment",
    ),
    pie("Were you able to secure employment?", "Secured Employment"),
    multi(
        "What challenges have you faced / are you facing in accessing the job market?",
        JOB_CHALLENGES_OPTIONS,
        "Job Challenges Faced",
    ),
    pie(
        "Are you planning to look for job in the coming months?",
        "Planning to Seek Employment",
    ),
    multi(
        "What type of support do you think would be helpful for refugees in securing employment?",
        JOB_SUPPORT_OPTIONS,
        "Support Needed for Employment",
    ),
    pie(
        "How would you describe the level of interaction between Ukrainian refugees and the local Moldovan community?",
        "Level of Interaction with Local Community",
    ),
    multi(
        "What are your biggest concerns about your future in Moldova?",
        FUTURE_CONCERNS_OPTIONS,
        "Future Concerns",
    ),
    multi(
        "In your opinion, what is the most urgent need for refugees in Moldova right now?",
        URGENT_NEEDS_OPTIONS,
        "Urgent Needs",
    ),
    multi(
        "What are your future plans regarding the war?",
        FUTURE_PLANS_OPTIONS,
        "Future Plans Regarding the War",
    ),
];

/// The columns without which the dashboard cannot be produced.
///
/// The columns of the correlation charts are not part of it: these charts are
/// skipped when their columns are absent.
pub fn required_columns() -> Vec<&'static str> {
    let mut res: Vec<&'static str> = FACETS.iter().map(|f| f.column).collect();
    for c in [HOUSEHOLD_SIZE, HOUSEHOLD_CHILDREN, HOUSEHOLD_ELDERLY, AGE] {
        if !res.contains(&c) {
            res.push(c);
        }
    }
    for chart in CHARTS {
        if !res.contains(&chart.column) {
            res.push(chart.column);
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_no_duplicates() {
        for chart in CHARTS {
            if let ChartKind::MultiAnswer(catalog) = chart.kind {
                for (idx, option) in catalog.iter().enumerate() {
                    assert!(
                        !catalog[idx + 1..].contains(option),
                        "duplicate option {:?} for {:?}",
                        option,
                        chart.column
                    );
                }
            }
        }
    }

    #[test]
    fn required_columns_are_unique() {
        let cols = required_columns();
        for (idx, c) in cols.iter().enumerate() {
            assert!(!cols[idx + 1..].contains(c), "duplicate column {:?}", c);
        }
        assert!(cols.contains(&SEX));
        assert!(!cols.contains(&ACCESSED_HEALTHCARE));
    }
}
