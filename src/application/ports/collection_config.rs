use super::{DistanceMetric, PayloadFieldType, PayloadIndex};

#[derive(Debug, Clone)]
pub struct CollectionConfig {
    pub vector_dimensions: u64,
    pub distance_metric: DistanceMetric,
    pub payload_indexes: Vec<PayloadIndex>,
}

impl CollectionConfig {
    /// Cosine collection with keyword indexes on the passage provenance fields.
    pub fn new(vector_dimensions: u64) -> Self {
        Self {
            vector_dimensions,
            distance_metric: DistanceMetric::Cosine,
            payload_indexes: ["source", "language"]
                .into_iter()
                .map(|field| PayloadIndex {
                    field_name: field.to_string(),
                    field_type: PayloadFieldType::Keyword,
                })
                .collect(),
        }
    }
}
