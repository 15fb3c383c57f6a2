use crate::model::id::SpaceId;

/// A bookable amenity from the building catalog. Catalog data is static
/// for the process lifetime; there are no create/update operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space {
    pub id: SpaceId,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub capacity: i32,
    pub description: String,
}
