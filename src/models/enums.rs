//! Shared choice vocabularies. Every enum-coded column stores the wire code
//! as TEXT; validation and display-label lookup both go through these types
//! so the two can never drift apart.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "part")]
    Part,
    #[serde(rename = "project")]
    Project,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 3] = [Self::Full, Self::Part, Self::Project];

    pub fn code(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Part => "part",
            Self::Project => "project",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "Полная занятость",
            Self::Part => "Частичная занятость",
            Self::Project => "Проектная работа",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    /// Label for a stored code; unknown codes pass through unchanged.
    pub fn display_label(code: &str) -> &str {
        Self::parse(code).map(Self::label).unwrap_or(code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Experience {
    #[serde(rename = "no")]
    None,
    #[serde(rename = "1")]
    UpToOneYear,
    #[serde(rename = "1-3")]
    OneToThreeYears,
    #[serde(rename = "3+")]
    OverThreeYears,
}

impl Experience {
    pub const ALL: [Experience; 4] = [
        Self::None,
        Self::UpToOneYear,
        Self::OneToThreeYears,
        Self::OverThreeYears,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::None => "no",
            Self::UpToOneYear => "1",
            Self::OneToThreeYears => "1-3",
            Self::OverThreeYears => "3+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "Нет опыта",
            Self::UpToOneYear => "До 1 года",
            Self::OneToThreeYears => "1–3 года",
            Self::OverThreeYears => "Более 3 лет",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    pub fn display_label(code: &str) -> &str {
        Self::parse(code).map(Self::label).unwrap_or(code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schedule {
    #[serde(rename = "office")]
    Office,
    #[serde(rename = "remote")]
    Remote,
    #[serde(rename = "hybrid")]
    Hybrid,
    #[serde(rename = "flexible")]
    Flexible,
    #[serde(rename = "by_agreement")]
    ByAgreement,
}

impl Schedule {
    pub const ALL: [Schedule; 5] = [
        Self::Office,
        Self::Remote,
        Self::Hybrid,
        Self::Flexible,
        Self::ByAgreement,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Office => "office",
            Self::Remote => "remote",
            Self::Hybrid => "hybrid",
            Self::Flexible => "flexible",
            Self::ByAgreement => "by_agreement",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Office => "Офис",
            Self::Remote => "Удалёнка",
            Self::Hybrid => "Гибрид",
            Self::Flexible => "Гибкий график",
            Self::ByAgreement => "По договорённости",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    pub fn display_label(code: &str) -> &str {
        Self::parse(code).map(Self::label).unwrap_or(code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseType {
    #[serde(rename = "internal")]
    Internal,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "external_link")]
    ExternalLink,
}

impl ResponseType {
    pub const ALL: [ResponseType; 3] = [Self::Internal, Self::Email, Self::ExternalLink];

    pub fn code(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Email => "email",
            Self::ExternalLink => "external_link",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Internal => "Внутренний отклик",
            Self::Email => "Email",
            Self::ExternalLink => "Внешняя ссылка",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "reviewed")]
    Reviewed,
    #[serde(rename = "invited")]
    Invited,
    #[serde(rename = "rejected")]
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        Self::Pending,
        Self::Reviewed,
        Self::Invited,
        Self::Rejected,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Invited => "invited",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "На рассмотрении",
            Self::Reviewed => "Рассмотрено",
            Self::Invited => "Приглашён",
            Self::Rejected => "Отклонено",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "partner")]
    Partner,
    #[serde(rename = "student")]
    Student,
}

impl Role {
    pub const ALL: [Role; 3] = [Self::Admin, Self::Partner, Self::Student];

    pub fn code(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Partner => "partner",
            Self::Student => "student",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employment_type_codes_round_trip() {
        for value in EmploymentType::ALL {
            assert_eq!(EmploymentType::parse(value.code()), Some(value));
        }
        assert_eq!(EmploymentType::parse("internship"), None);
        assert_eq!(EmploymentType::parse(""), None);
    }

    #[test]
    fn experience_codes_round_trip() {
        for value in Experience::ALL {
            assert_eq!(Experience::parse(value.code()), Some(value));
        }
        assert_eq!(Experience::parse("3-5"), None);
    }

    #[test]
    fn display_label_falls_back_to_raw_code() {
        assert_eq!(EmploymentType::display_label("full"), "Полная занятость");
        assert_eq!(EmploymentType::display_label("weird"), "weird");
        assert_eq!(Schedule::display_label("by_agreement"), "По договорённости");
        assert_eq!(Experience::display_label("3+"), "Более 3 лет");
    }

    #[test]
    fn application_status_vocabulary() {
        assert_eq!(ApplicationStatus::parse("pending"), Some(ApplicationStatus::Pending));
        assert_eq!(ApplicationStatus::parse("archived"), None);
    }
}
