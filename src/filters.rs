//! Vacancy filter engine: turns the named query parameters of the listing
//! surface into a validated filter, then into conjunctive SQL predicates.
//!
//! Parsing is pure: enum membership and numeric checks happen here, before
//! any data access. The `specialization` id is only syntactically checked at
//! this stage; the listing service verifies it resolves to an existing
//! field of study.

use crate::error::{Error, Result};
use crate::models::enums::{EmploymentType, Experience};
use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

/// Select-backed parameters send "-1" for "any"; treat it like absent.
const ANY_SENTINEL: &str = "-1";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VacancyQuery {
    pub position: Option<String>,
    pub specialization: Option<String>,
    pub employment_type: Option<String>,
    pub experience: Option<String>,
    pub is_active: Option<String>,
    pub salary_min: Option<String>,
    pub city: Option<String>,
    pub company__industry: Option<String>,
    pub ordering: Option<String>,
    pub scope: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ordering {
    #[default]
    NewestFirst,
    SalaryMinAsc,
    SalaryMinDesc,
    SalaryMaxAsc,
    SalaryMaxDesc,
}

impl Ordering {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "salary_min" => Some(Self::SalaryMinAsc),
            "-salary_min" => Some(Self::SalaryMinDesc),
            "salary_max" => Some(Self::SalaryMaxAsc),
            "-salary_max" => Some(Self::SalaryMaxDesc),
            _ => None,
        }
    }

    /// ORDER BY clause over the aliased vacancies table. Salary orderings
    /// keep salary-less rows at the end in both directions.
    pub fn sql(self) -> &'static str {
        match self {
            Self::NewestFirst => "v.created_at DESC",
            Self::SalaryMinAsc => "v.salary_min ASC NULLS LAST",
            Self::SalaryMinDesc => "v.salary_min DESC NULLS LAST",
            Self::SalaryMaxAsc => "v.salary_max ASC NULLS LAST",
            Self::SalaryMaxDesc => "v.salary_max DESC NULLS LAST",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancyFilter {
    pub position: Option<String>,
    pub field_id: Option<i64>,
    pub employment_type: Option<EmploymentType>,
    pub experience: Option<Experience>,
    pub is_active: Option<bool>,
    pub salary_min: Option<i32>,
    pub city: Option<String>,
    pub company_industry: Option<String>,
    pub ordering: Ordering,
}

fn text_param(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|s| !s.is_empty())
}

fn choice_param(raw: &Option<String>) -> Option<&str> {
    text_param(raw).filter(|s| *s != ANY_SENTINEL)
}

impl VacancyFilter {
    pub fn parse(query: &VacancyQuery) -> Result<Self> {
        let mut filter = VacancyFilter {
            position: text_param(&query.position).map(str::to_string),
            city: text_param(&query.city).map(str::to_string),
            company_industry: text_param(&query.company__industry).map(str::to_string),
            ..Default::default()
        };

        if let Some(raw) = choice_param(&query.specialization) {
            let id = raw
                .parse::<i64>()
                .map_err(|_| Error::BadRequest("Invalid specialization".to_string()))?;
            filter.field_id = Some(id);
        }

        if let Some(raw) = choice_param(&query.employment_type) {
            filter.employment_type = Some(
                EmploymentType::parse(raw)
                    .ok_or_else(|| Error::BadRequest("Invalid employment type".to_string()))?,
            );
        }

        if let Some(raw) = choice_param(&query.experience) {
            filter.experience = Some(
                Experience::parse(raw)
                    .ok_or_else(|| Error::BadRequest("Invalid experience choice".to_string()))?,
            );
        }

        if let Some(raw) = text_param(&query.is_active) {
            if raw.eq_ignore_ascii_case("true") {
                filter.is_active = Some(true);
            } else if raw.eq_ignore_ascii_case("false") {
                filter.is_active = Some(false);
            } else {
                return Err(Error::BadRequest("Invalid is_active value".to_string()));
            }
        }

        if let Some(raw) = text_param(&query.salary_min) {
            let threshold = raw
                .parse::<i32>()
                .map_err(|_| Error::BadRequest("Invalid salary_min value".to_string()))?;
            filter.salary_min = Some(threshold);
        }

        if let Some(raw) = text_param(&query.ordering) {
            filter.ordering = Ordering::parse(raw)
                .ok_or_else(|| Error::BadRequest("Invalid ordering".to_string()))?;
        }

        Ok(filter)
    }

    /// Appends one `AND ...` predicate per present filter. The caller's query
    /// must already have an open WHERE clause (`WHERE 1=1` style) over
    /// `vacancies v` joined with `companies c`.
    ///
    /// A `salary_min` threshold deliberately drops vacancies whose own
    /// `salary_min` is unset: SQL `>=` over NULL is not true.
    pub fn push_predicates(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        if let Some(position) = &self.position {
            qb.push(" AND v.title ILIKE ")
                .push_bind(format!("%{}%", position));
        }
        if let Some(field_id) = self.field_id {
            qb.push(" AND v.field_id = ").push_bind(field_id);
        }
        if let Some(employment_type) = self.employment_type {
            qb.push(" AND v.employment_type = ")
                .push_bind(employment_type.code());
        }
        if let Some(experience) = self.experience {
            qb.push(" AND v.experience = ").push_bind(experience.code());
        }
        if let Some(is_active) = self.is_active {
            qb.push(" AND v.is_active = ").push_bind(is_active);
        }
        if let Some(threshold) = self.salary_min {
            qb.push(" AND v.salary_min >= ").push_bind(threshold);
        }
        if let Some(city) = &self.city {
            qb.push(" AND LOWER(v.city) = LOWER(")
                .push_bind(city.clone())
                .push(")");
        }
        if let Some(industry) = &self.company_industry {
            qb.push(" AND c.industry ILIKE ")
                .push_bind(format!("%{}%", industry));
        }
    }
}
