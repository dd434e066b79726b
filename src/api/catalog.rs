use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;
use ventureflow_domain::{BusinessCategory, BusinessSubcategory, Catalog, DEFAULT_GRADIENT};

use super::{ApiClient, ApiError, RequestScope};

const CATEGORIES_PATH: &str = "categories";

/// Category record as the backend sends it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiCategory {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub gradient: Option<String>,
    #[serde(default)]
    pub subcategories: Option<Vec<BusinessSubcategory>>,
}

/// Accepts either a bare array or `{ "categories": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoriesResponse {
    List(Vec<ApiCategory>),
    Wrapped { categories: Vec<ApiCategory> },
}

impl CategoriesResponse {
    fn into_categories(self) -> Vec<ApiCategory> {
        match self {
            CategoriesResponse::List(categories) | CategoriesResponse::Wrapped { categories } => categories,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoriesRequest {
    include_fields: bool,
}

fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Converts backend records into a catalog. Missing subcategories are taken
/// from `fallback` by category id; missing gradients use the default.
pub fn map_categories(records: Vec<ApiCategory>, fallback: &Catalog) -> Catalog {
    let categories = records
        .into_iter()
        .map(|record| {
            let subcategories = record.subcategories.unwrap_or_else(|| {
                fallback
                    .category(&record.id)
                    .map(|known| known.subcategories.clone())
                    .unwrap_or_default()
            });
            BusinessCategory::new(record.id, record.name, record.description, subcategories)
                .with_gradient(record.gradient.unwrap_or_else(|| DEFAULT_GRADIENT.to_string()))
        })
        .collect();
    Catalog::new(categories)
}

/// Category endpoint.
pub struct CatalogApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CatalogApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetches and validates the catalog. Structural problems are reported as
    /// [`ApiError::InvalidCatalog`].
    pub async fn fetch_categories(&self, scope: &RequestScope) -> Result<Catalog, ApiError> {
        let response: CategoriesResponse = self
            .client
            .send_post(CATEGORIES_PATH, &CategoriesRequest { include_fields: true }, scope)
            .await?;

        let catalog = map_categories(response.into_categories(), &Catalog::builtin());
        if catalog.is_empty() {
            return Err(ApiError::InvalidCatalog("no categories".into()));
        }
        let issues = catalog.validate();
        if !issues.is_empty() {
            let summary = issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ApiError::InvalidCatalog(summary));
        }

        info!(categories = catalog.categories.len(), "catalog loaded from backend");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_renames_and_fills_defaults() {
        let records: Vec<ApiCategory> = serde_json::from_str(
            r#"[
                {"id": "accommodation", "name": "Stays", "description": "Places to sleep"},
                {"id": 42, "name": "Markets", "gradient": "from-lime-400 to-green-600", "subcategories": []}
            ]"#,
        )
        .unwrap();

        let catalog = map_categories(records, &Catalog::builtin());
        let stays = catalog.category("accommodation").unwrap();
        assert_eq!(stays.title, "Stays");
        assert_eq!(stays.gradient, DEFAULT_GRADIENT);
        assert!(stays.subcategory("hotels").is_some());

        let markets = catalog.category("42").unwrap();
        assert_eq!(markets.gradient, "from-lime-400 to-green-600");
        assert!(markets.subcategories.is_empty());
    }

    #[test]
    fn unknown_category_without_subcategories_maps_empty() {
        let records = vec![ApiCategory {
            id: "wellness".into(),
            name: "Wellness".into(),
            description: String::new(),
            gradient: None,
            subcategories: None,
        }];
        let catalog = map_categories(records, &Catalog::builtin());
        assert!(catalog.category("wellness").unwrap().subcategories.is_empty());
    }

    #[test]
    fn wrapped_response_is_accepted() {
        let response: CategoriesResponse =
            serde_json::from_str(r#"{"categories": [{"id": "a", "name": "A"}]}"#).unwrap();
        assert_eq!(response.into_categories().len(), 1);
    }
}
