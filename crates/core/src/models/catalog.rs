use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    Haircuts,
    Coloring,
    Treatments,
    #[serde(other)]
    Other,
}

impl ServiceType {
    /// Name used in backend paths such as `/services/type/{type}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Haircuts => "HAIRCUTS",
            ServiceType::Coloring => "COLORING",
            ServiceType::Treatments => "TREATMENTS",
            ServiceType::Other => "OTHER",
        }
    }
}

impl std::str::FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HAIRCUTS" => Ok(ServiceType::Haircuts),
            "COLORING" => Ok(ServiceType::Coloring),
            "TREATMENTS" => Ok(ServiceType::Treatments),
            other => Err(format!("unknown service type: {}", other)),
        }
    }
}

/// A bookable salon service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub service_id: i64,
    pub service_type: ServiceType,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, alias = "duration_minutes")]
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Shampoo,
    Conditioner,
    HairMask,
    HairOil,
    HairSpray,
    HairMousse,
    HairWax,
    HairClay,
    HairPowder,
    HairSilk,
    HairDye,
    HairExtensions,
    SkinExfoliation,
    SkinMoisturizer,
    SelfTanning,
    HairRemoval,
    #[serde(other)]
    OtherStyling,
}

/// A retail product sold over the counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub product_id: i64,
    pub product_type: ProductType,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock_quantity: u32,
    #[serde(default)]
    pub inventory_level: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
