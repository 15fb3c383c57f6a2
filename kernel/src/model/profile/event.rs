use derive_new::new;

/// A roster entry accepted for import. The Directory assigns a fresh id
/// and the resident role on insertion.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CreateProfile {
    pub full_name: String,
    pub email: String,
    pub unit_number: String,
}
