//! The quote-request submission and the option catalogs the form offers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A quote request as collected by the form and carried to the relay.
///
/// Every field falls back to its default when absent from the JSON body, so
/// a partial payload still deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// One of the [`Service`] wire values (not enforced)
    pub service: String,
    /// One of the [`Budget`] wire values (not enforced)
    pub budget: String,
    /// One of the [`Priority`] wire values, `Low` unless changed
    pub priority: String,
    /// Calendar date, ISO-8601 (`YYYY-MM-DD`)
    pub launch_date: String,
    pub comments: String,
    pub consent: bool,
}

impl Default for Submission {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            service: String::new(),
            budget: String::new(),
            priority: Priority::default().as_str().to_owned(),
            launch_date: String::new(),
            comments: String::new(),
            consent: false,
        }
    }
}

impl Submission {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a submission from arbitrary JSON without rejecting anything.
    ///
    /// Missing or null fields become empty text, non-string scalars are
    /// rendered as their JSON text, and a non-object body yields an empty
    /// submission with no priority.
    pub fn from_json_lenient(value: &Value) -> Self {
        let text = |field: Field| match value.get(field.as_str()) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };

        Self {
            name: text(Field::Name),
            email: text(Field::Email),
            phone: text(Field::Phone),
            address: text(Field::Address),
            service: text(Field::Service),
            budget: text(Field::Budget),
            priority: text(Field::Priority),
            launch_date: text(Field::LaunchDate),
            comments: text(Field::Comments),
            consent: value
                .get(Field::Consent.as_str())
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }

    /// Text value of a field, `None` for the consent checkbox
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::Service => &self.service,
            Field::Budget => &self.budget,
            Field::Priority => &self.priority,
            Field::LaunchDate => &self.launch_date,
            Field::Comments => &self.comments,
            Field::Consent => return None,
        };
        Some(value.as_str())
    }

    /// Assign a field. Checkbox fields take the checked state.
    pub fn set(&mut self, field: Field, value: FieldValue) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Address => &mut self.address,
            Field::Service => &mut self.service,
            Field::Budget => &mut self.budget,
            Field::Priority => &mut self.priority,
            Field::LaunchDate => &mut self.launch_date,
            Field::Comments => &mut self.comments,
            Field::Consent => {
                self.consent = value.is_truthy();
                return;
            }
        };
        *slot = value.into_text();
    }
}

/// Fields of the quote-request form, named as they appear on the wire
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Address,
    Service,
    Budget,
    Priority,
    LaunchDate,
    Comments,
    Consent,
}

impl Field {
    /// Fields counted toward form completion. Priority always has a value
    /// and is left out.
    pub const REQUIRED: [Field; 9] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Address,
        Field::Service,
        Field::Budget,
        Field::LaunchDate,
        Field::Comments,
        Field::Consent,
    ];

    /// Wire name of the field
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    pub fn is_checkbox(self) -> bool {
        matches!(self, Field::Consent)
    }

    /// Whether the submission currently holds a non-empty value for this field
    pub fn is_truthy(self, submission: &Submission) -> bool {
        match submission.text(self) {
            Some(text) => !text.is_empty(),
            None => submission.consent,
        }
    }

    /// Iterate over every form field
    pub fn all() -> impl Iterator<Item = Field> {
        Self::iter()
    }
}

/// A value coming from a form control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text inputs, selects, radios, and date pickers
    Text(String),
    /// Checkbox checked-state
    Checked(bool),
}

impl FieldValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Checked(checked) => *checked,
        }
    }

    fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Checked(true) => "true".to_owned(),
            FieldValue::Checked(false) => String::new(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        FieldValue::Checked(checked)
    }
}

/// Service categories offered in the quote form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum Service {
    #[strum(serialize = "web-development")]
    WebDevelopment,
    #[strum(serialize = "mobile-app")]
    MobileApp,
    #[strum(serialize = "ui-ux-design")]
    UiUxDesign,
    #[strum(serialize = "digital-marketing")]
    DigitalMarketing,
    #[strum(serialize = "seo")]
    Seo,
}

impl Service {
    /// Value submitted on the wire
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Text shown in the select
    pub const fn label(self) -> &'static str {
        match self {
            Service::WebDevelopment => "🌐 Web Development",
            Service::MobileApp => "📱 Mobile App Development",
            Service::UiUxDesign => "🎨 UI/UX Design",
            Service::DigitalMarketing => "📈 Digital Marketing",
            Service::Seo => "🔍 SEO Services",
        }
    }

    pub fn options() -> impl Iterator<Item = Service> {
        Self::iter()
    }
}

/// Budget bands offered in the quote form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum Budget {
    #[strum(serialize = "under-5k")]
    Under5k,
    #[strum(serialize = "5k-10k")]
    From5kTo10k,
    #[strum(serialize = "10k-25k")]
    From10kTo25k,
    #[strum(serialize = "25k-50k")]
    From25kTo50k,
    #[strum(serialize = "over-50k")]
    Over50k,
}

impl Budget {
    /// Value submitted on the wire
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Text shown in the select
    pub const fn label(self) -> &'static str {
        match self {
            Budget::Under5k => "💰 Under ₹5,000",
            Budget::From5kTo10k => "💰💰 ₹5,000 - ₹10,000",
            Budget::From10kTo25k => "💰💰💰 ₹10,000 - ₹25,000",
            Budget::From25kTo50k => "💎 ₹25,000 - ₹50,000",
            Budget::Over50k => "💎💎 Over ₹50,000",
        }
    }

    pub fn options() -> impl Iterator<Item = Budget> {
        Self::iter()
    }
}

/// Project priority
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    Urgent,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn options() -> impl Iterator<Item = Priority> {
        Self::iter()
    }
}
