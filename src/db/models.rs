use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Error returned when a stored or submitted value is not one of an enum's variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

/// Declares a closed set of lowercase text values stored in TEXT columns.
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

text_enum!(
    /// Lifecycle of a booking. Only `Pending` is ever written by this service.
    AppointmentStatus, "appointment status" {
        Pending => "pending",
        Confirmed => "confirmed",
        Completed => "completed",
        Cancelled => "cancelled",
    }
);

text_enum!(
    AppointmentType, "appointment type" {
        Online => "online",
        Offline => "offline",
        Emergency => "emergency",
    }
);

text_enum!(
    Gender, "gender" {
        Male => "male",
        Female => "female",
        Other => "other",
    }
);

text_enum!(
    FacilityCategory, "facility category" {
        Medical => "medical",
        Support => "support",
        General => "general",
        Technology => "technology",
    }
);

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub experience: String,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub rating: f64,
    pub review_count: i64,
    pub price: String,
    pub bio: String,
    pub profile_image: Option<String>,
    /// Free-form weekly schedule entries as entered by staff.
    pub schedule: Option<Value>,
    pub consultation_types: Vec<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub read_time: String,
    pub views: i64,
    pub likes: i64,
    pub image: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Facility {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: FacilityCategory,
    pub features: Vec<String>,
    pub images: Option<Vec<String>>,
    pub capacity: Option<String>,
    pub location: Option<String>,
    pub staff: Option<String>,
    pub certification: Option<String>,
    pub types: Option<Vec<String>>,
    pub coverage: Option<String>,
    pub benefits: Option<Vec<String>>,
    pub is_active: bool,
    pub order: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Testimonial {
    pub id: i64,
    pub patient_name: String,
    pub treatment: String,
    pub testimonial: String,
    pub rating: i64,
    pub treatment_date: Option<NaiveDate>,
    pub patient_image: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
}

/// A validated booking ready to be inserted with status `pending`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub doctor_id: i64,
    pub appointment_date: NaiveDate,
    /// Normalized `HH:MM`.
    pub appointment_time: String,
    pub appointment_type: AppointmentType,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_email: String,
    pub patient_age: i64,
    pub patient_gender: Gender,
    pub complaint: String,
    pub symptoms: Vec<String>,
    pub emergency_contact: Option<String>,
    pub insurance: Option<String>,
}

/// Doctor fields joined onto an appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDoctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub user_id: Option<i64>,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub status: AppointmentStatus,
    pub appointment_type: AppointmentType,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_email: String,
    pub patient_age: i64,
    pub patient_gender: Gender,
    pub complaint: String,
    pub symptoms: Vec<String>,
    pub emergency_contact: Option<String>,
    pub insurance: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub doctor: AppointmentDoctor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_enums_parse_their_own_spelling_only() {
        assert_eq!("emergency".parse(), Ok(AppointmentType::Emergency));
        assert_eq!(Gender::Female.as_str(), "female");
        let err = "Male".parse::<Gender>().unwrap_err();
        assert_eq!(err.to_string(), "unknown gender `Male`");
    }

    #[test]
    fn facility_categories_are_listed_in_declaration_order() {
        let names: Vec<&str> = FacilityCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["medical", "support", "general", "technology"]);
    }
}
