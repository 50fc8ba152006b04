use serde::{Deserialize, Serialize, Serializer};
use mongodb::bson::oid::ObjectId;

/// A catalog cell as the import stored it.
///
/// The import guesses column types, so the same field can hold text in one
/// row and a number in the next, and blank cells arrive as `""`. Values are
/// echoed back in the type they were stored with.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// Drug record as imported into `dd_collection`.
///
/// Every field is optional: the import is out-of-band and rows are not
/// guaranteed to be complete.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, utoipa::ToSchema)]
pub struct Drug {
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_object_id"
    )]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub drug_name: Option<FieldValue>,
    pub medical_condition: Option<FieldValue>,
    pub side_effects: Option<FieldValue>,
    pub generic_name: Option<FieldValue>,
    pub drug_classes: Option<FieldValue>,
    pub brand_names: Option<FieldValue>,
    pub activity: Option<FieldValue>,
    pub rx_otc: Option<FieldValue>,
    pub pregnancy_category: Option<FieldValue>,
    pub csa: Option<FieldValue>,
    pub alcohol: Option<FieldValue>,
    pub related_drugs: Option<FieldValue>,
    pub medical_condition_description: Option<FieldValue>,
    pub rating: Option<FieldValue>,
    pub no_of_reviews: Option<FieldValue>,
    pub drug_link: Option<FieldValue>,
    pub medical_condition_url: Option<FieldValue>,
}

impl Drug {
    /// Name used for lookups; non-text names never match
    pub fn name(&self) -> Option<&str> {
        self.drug_name.as_ref().and_then(FieldValue::as_text)
    }
}

/// Reduced view returned by `/check-drugs`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct DrugSummary {
    pub drug_name: Option<FieldValue>,
    pub side_effects: Option<FieldValue>,
    pub drug_classes: Option<FieldValue>,
    pub medical_condition: Option<FieldValue>,
}

impl From<Drug> for DrugSummary {
    fn from(drug: Drug) -> Self {
        Self {
            drug_name: drug.drug_name,
            side_effects: drug.side_effects,
            drug_classes: drug.drug_classes,
            medical_condition: drug.medical_condition,
        }
    }
}

// JSON clients get the hex string, not the extended `{"$oid": ...}` form
fn serialize_object_id<S>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}
