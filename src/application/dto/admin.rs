use crate::domain::admin::AdminListConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One admin change-list page, projected to the kind's `list_display` columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminListDto {
    pub kind: String,
    pub columns: Vec<String>,
    pub links: Vec<String>,
    pub editable: Vec<String>,
    pub filters: Vec<String>,
    pub ordering: String,
    pub readonly: Vec<String>,
    /// Form field to the field it is pre-filled from.
    pub prepopulated: Map<String, Value>,
    pub autocomplete: Vec<String>,
    pub rows: Vec<Map<String, Value>>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl AdminListDto {
    pub fn project<T: Serialize>(
        config: &AdminListConfig,
        items: Vec<T>,
        page: u32,
        total: u64,
    ) -> serde_json::Result<Self> {
        let rows = items
            .into_iter()
            .map(|item| {
                let value = serde_json::to_value(item)?;
                Ok(config
                    .list_display
                    .iter()
                    .map(|column| {
                        let cell = value.get(*column).cloned().unwrap_or(Value::Null);
                        ((*column).to_owned(), cell)
                    })
                    .collect::<Map<_, _>>())
            })
            .collect::<serde_json::Result<Vec<_>>>()?;

        Ok(Self {
            kind: config.kind.plural().to_owned(),
            columns: to_owned(config.list_display),
            links: to_owned(config.list_display_links),
            editable: to_owned(config.list_editable),
            filters: to_owned(config.list_filter),
            ordering: config.ordering.as_str().to_owned(),
            readonly: to_owned(config.readonly_fields),
            prepopulated: config
                .prepopulated_fields
                .iter()
                .map(|(target, source)| ((*target).to_owned(), Value::from(*source)))
                .collect(),
            autocomplete: to_owned(config.autocomplete_fields),
            rows,
            page,
            per_page: config.list_per_page,
            total,
        })
    }
}

fn to_owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|field| (*field).to_owned()).collect()
}
