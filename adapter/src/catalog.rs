//! Seed data: the fixed amenity catalog, the daily slot schedule, and
//! the two well-known profiles used to simulate identity switching.

use chrono::NaiveTime;
use kernel::model::{
    id::{ProfileId, SpaceId},
    profile::Profile,
    role::Role,
    slot::TimeSlot,
    space::Space,
};

/// Bookable hours run 09:00 through 22:00, one slot per hour.
const FIRST_SLOT_HOUR: u32 = 9;
const LAST_SLOT_HOUR: u32 = 22;

pub fn time_slots() -> Vec<TimeSlot> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .map(TimeSlot::from)
        .collect()
}

pub fn spaces() -> Vec<Space> {
    let raw: [(&str, &str, &str, &str, i32, &str); 6] = [
        (
            "1",
            "SUM Principal",
            "🏢",
            "#3B82F6",
            40,
            "Salón de usos múltiples con cocina completa.",
        ),
        (
            "2",
            "Parrilla Terraza",
            "🔥",
            "#10B981",
            10,
            "Espacio al aire libre con parrilla y mesa.",
        ),
        (
            "3",
            "Quincho",
            "🛖",
            "#F59E0B",
            20,
            "Quincho cerrado con aire acondicionado.",
        ),
        (
            "4",
            "Microcine",
            "🎬",
            "#8B5CF6",
            12,
            "Sala de cine privada con proyector 4K.",
        ),
        (
            "5",
            "Gimnasio",
            "💪",
            "#EF4444",
            8,
            "Equipamiento de última generación.",
        ),
        (
            "6",
            "Coworking",
            "💻",
            "#06B6D4",
            15,
            "Espacio silencioso para trabajo y reuniones.",
        ),
    ];

    raw.into_iter()
        .map(|(id, name, icon, color, capacity, description)| Space {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            capacity,
            description: description.into(),
        })
        .collect()
}

pub fn find_space(space_id: &SpaceId) -> Option<Space> {
    spaces().into_iter().find(|space| space.id == *space_id)
}

/// The resident every cold start boots as.
pub fn default_resident() -> Profile {
    Profile {
        id: ProfileId::from("res-1"),
        email: "maria@edificio.com".into(),
        full_name: "María García".into(),
        unit_number: "4B".into(),
        role: Role::Resident,
    }
}

/// The well-known admin identity behind the role toggle. Not part of
/// the persisted resident directory.
pub fn default_admin() -> Profile {
    Profile {
        id: ProfileId::from("admin-1"),
        email: "admin@edificio.com".into(),
        full_name: "Roberto Administrador".into(),
        unit_number: "AD-01".into(),
        role: Role::Admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_runs_hourly_from_nine_to_twenty_two() {
        let slots = time_slots();
        assert_eq!(slots.len(), 14);
        assert_eq!(slots[0].to_string(), "09:00");
        assert_eq!(slots[13].to_string(), "22:00");
    }

    #[test]
    fn catalog_lists_the_six_amenities() {
        let spaces = spaces();
        assert_eq!(spaces.len(), 6);
        assert!(spaces.iter().all(|s| s.capacity > 0));
        assert_eq!(find_space(&"3".into()).map(|s| s.name), Some("Quincho".into()));
        assert!(find_space(&"99".into()).is_none());
    }
}
