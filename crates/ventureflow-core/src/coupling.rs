//! Keeps bed counts and guest limits consistent while the user types.

use ventureflow_domain::{FieldValue, ListingData};

pub const MIN_GUESTS: f64 = 1.0;
pub const MAX_GUESTS: f64 = 100.0;

const BEDS_FIELD: &str = "numberOfBeds";
const GUESTS_FIELD: &str = "maxGuests";
const BEDS_SUFFIX: &str = "_beds";
const GUESTS_SUFFIX: &str = "_maxGuests";

/// Guest-limit field paired with a bed-count field.
pub fn guests_partner(field_id: &str) -> Option<String> {
    if field_id == BEDS_FIELD {
        return Some(GUESTS_FIELD.to_string());
    }
    field_id
        .strip_suffix(BEDS_SUFFIX)
        .filter(|prefix| !prefix.is_empty())
        .map(|prefix| format!("{prefix}{GUESTS_SUFFIX}"))
}

pub fn is_guests_field(field_id: &str) -> bool {
    field_id == GUESTS_FIELD
        || field_id
            .strip_suffix(GUESTS_SUFFIX)
            .map(|prefix| !prefix.is_empty())
            .unwrap_or(false)
}

/// Clamps a guest limit into `[MIN_GUESTS, MAX_GUESTS]`; blank or
/// non-numeric input becomes `MIN_GUESTS`.
pub fn clamp_guests(value: &FieldValue) -> f64 {
    match value.as_number() {
        Some(guests) if guests.is_finite() => guests.round().clamp(MIN_GUESTS, MAX_GUESTS),
        _ => MIN_GUESTS,
    }
}

/// Stores `value` under `field_id` and applies the bed/guest coupling.
/// Returns the ids of other fields that were adjusted.
pub fn apply_field_change(values: &mut ListingData, field_id: &str, value: FieldValue) -> Vec<String> {
    if is_guests_field(field_id) {
        values.insert(field_id.to_string(), FieldValue::Number(clamp_guests(&value)));
        return Vec::new();
    }

    let beds = value.as_number();
    values.insert(field_id.to_string(), value);

    let Some(partner) = guests_partner(field_id) else {
        return Vec::new();
    };
    let Some(beds) = beds.filter(|beds| beds.is_finite() && *beds > 0.0) else {
        return Vec::new();
    };

    let current = values.get(&partner).and_then(FieldValue::as_number);
    if current.map(|guests| guests > beds).unwrap_or(true) {
        values.insert(partner.clone(), FieldValue::Number(beds.min(MAX_GUESTS)));
        return vec![partner];
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partners_cover_base_and_room_type_fields() {
        assert_eq!(guests_partner("numberOfBeds").as_deref(), Some("maxGuests"));
        assert_eq!(guests_partner("suite_beds").as_deref(), Some("suite_maxGuests"));
        assert_eq!(guests_partner("_beds"), None);
        assert_eq!(guests_partner("name"), None);
        assert!(is_guests_field("maxGuests"));
        assert!(is_guests_field("double_maxGuests"));
        assert!(!is_guests_field("guests"));
    }

    #[test]
    fn lowering_beds_clamps_guests() {
        let mut values = ListingData::new();
        values.insert("maxGuests".into(), FieldValue::Number(5.0));
        let adjusted = apply_field_change(&mut values, "numberOfBeds", FieldValue::Number(2.0));
        assert_eq!(adjusted, vec!["maxGuests".to_string()]);
        assert_eq!(values["maxGuests"], FieldValue::Number(2.0));
    }

    #[test]
    fn beds_default_unset_guests() {
        let mut values = ListingData::new();
        apply_field_change(&mut values, "double_beds", FieldValue::text("3"));
        assert_eq!(values["double_maxGuests"], FieldValue::Number(3.0));
        assert_eq!(values["double_beds"], FieldValue::text("3"));
    }

    #[test]
    fn raising_beds_keeps_smaller_guest_limit() {
        let mut values = ListingData::new();
        values.insert("maxGuests".into(), FieldValue::Number(2.0));
        let adjusted = apply_field_change(&mut values, "numberOfBeds", FieldValue::Number(4.0));
        assert!(adjusted.is_empty());
        assert_eq!(values["maxGuests"], FieldValue::Number(2.0));
    }

    #[test]
    fn guests_are_clamped_into_range() {
        let mut values = ListingData::new();
        apply_field_change(&mut values, "maxGuests", FieldValue::Number(150.0));
        assert_eq!(values["maxGuests"], FieldValue::Number(100.0));
        apply_field_change(&mut values, "maxGuests", FieldValue::Number(0.0));
        assert_eq!(values["maxGuests"], FieldValue::Number(1.0));
        apply_field_change(&mut values, "maxGuests", FieldValue::text(""));
        assert_eq!(values["maxGuests"], FieldValue::Number(1.0));
        apply_field_change(&mut values, "maxGuests", FieldValue::text("abc"));
        assert_eq!(values["maxGuests"], FieldValue::Number(1.0));
    }
}
