//! Static field catalog shipped with the application. Used when the backend
//! catalog is unavailable and to fill in subcategories the backend omits.

use crate::catalog::{BusinessCategory, BusinessSubcategory, Catalog};
use crate::field::{DependsOn, FieldType, FormField};

/// Room types offered by hotel listings.
pub const ROOM_TYPES: [&str; 4] = ["Single", "Double", "Suite", "Family"];

const ROOM_AMENITIES: [&str; 6] = [
    "Air Conditioning",
    "Balcony",
    "Mini Bar",
    "Sea View",
    "Bathtub",
    "Work Desk",
];

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        Catalog::new(vec![accommodation(), food_and_beverage(), activities()])
    }
}

/// Per-room-type fields revealed when `option` is selected in `roomTypes`.
pub fn room_type_fields(option: &str) -> Vec<FormField> {
    let slug = option.to_ascii_lowercase();
    vec![
        FormField::new(format!("{slug}_beds"), format!("{option} – Number of Beds"), FieldType::Number),
        FormField::new(
            format!("{slug}_maxGuests"),
            format!("{option} – Max Guests"),
            FieldType::Number,
        ),
        FormField::new(
            format!("{slug}_amenities"),
            format!("{option} – Amenities"),
            FieldType::MultiSelect,
        )
        .with_optional()
        .with_options(&ROOM_AMENITIES),
        FormField::new(format!("{slug}_price"), format!("{option} – Price per Night"), FieldType::Price),
    ]
}

fn accommodation() -> BusinessCategory {
    let mut room_types = FormField::new("roomTypes", "Room Types", FieldType::MultiSelect)
        .with_options(&ROOM_TYPES);
    for option in ROOM_TYPES {
        room_types = room_types.with_dynamic_fields(option, room_type_fields(option));
    }

    let hotels = BusinessSubcategory::new(
        "hotels",
        "Hotels",
        "Hotels and resorts with multiple room types",
        vec![
            FormField::new("name", "Hotel Name", FieldType::Text).with_placeholder("e.g. Lakeview Inn"),
            FormField::new("description", "Description", FieldType::Textarea).with_optional(),
            FormField::new("location", "Location", FieldType::Map).with_optional(),
            FormField::new("starRating", "Star Rating", FieldType::Rating),
            room_types,
            FormField::new("checkInTime", "Check-in Time", FieldType::Time).with_placeholder("14:00"),
            FormField::new("facilities", "Facilities", FieldType::MultiSelect)
                .with_optional()
                .with_options(&["Pool", "Spa", "Gym", "Restaurant", "Parking", "Airport Shuttle"]),
            FormField::new("photos", "Photos", FieldType::File),
            FormField::new("petsAllowed", "Pets Allowed", FieldType::Boolean).with_optional(),
        ],
    );

    let villas = BusinessSubcategory::new(
        "villas",
        "Villas",
        "Private villas rented as a whole",
        vec![
            FormField::new("name", "Villa Name", FieldType::Text),
            FormField::new("location", "Location", FieldType::Map),
            FormField::new("numberOfBeds", "Number of Beds", FieldType::Number),
            FormField::new("maxGuests", "Max Guests", FieldType::Number),
            FormField::new("privatePool", "Private Pool", FieldType::Checkbox).with_optional(),
            FormField::new("amenities", "Amenities", FieldType::MultiSelect)
                .with_options(&["Wi-Fi", "Kitchen", "Garden", "BBQ", "Housekeeping"]),
            FormField::new("pricePerNight", "Price per Night", FieldType::Price),
            FormField::new("photos", "Photos", FieldType::File).with_optional(),
            FormField::new("houseRules", "House Rules", FieldType::Textarea).with_optional(),
        ],
    );

    let guest_houses = BusinessSubcategory::new(
        "guest_houses",
        "Guest Houses",
        "Family-run guest houses and homestays",
        vec![
            FormField::new("name", "Guest House Name", FieldType::Text),
            FormField::new("hostName", "Host Name", FieldType::Text),
            FormField::new("numberOfBeds", "Number of Beds", FieldType::Number),
            FormField::new("maxGuests", "Max Guests", FieldType::Number),
            FormField::new("breakfastIncluded", "Breakfast Included", FieldType::Boolean)
                .with_optional(),
            FormField::new("pricePerNight", "Price per Night", FieldType::Price),
            FormField::new("location", "Location", FieldType::Map),
        ],
    );

    BusinessCategory::new(
        "accommodation",
        "Accommodation",
        "Hotels, villas and guest houses",
        vec![hotels, villas, guest_houses],
    )
    .with_gradient("from-sky-500 to-indigo-600")
}

fn food_and_beverage() -> BusinessCategory {
    let restaurants = BusinessSubcategory::new(
        "restaurants",
        "Restaurants",
        "Sit-down restaurants and eateries",
        vec![
            FormField::new("name", "Restaurant Name", FieldType::Text),
            FormField::new("cuisine", "Cuisine", FieldType::MultiSelect)
                .with_options(&["Sri Lankan", "Indian", "Chinese", "Italian", "Seafood", "Vegan"]),
            FormField::new("priceRange", "Price Range", FieldType::Select)
                .with_options(&["$", "$$", "$$$"]),
            FormField::new("openingTime", "Opening Time", FieldType::Time),
            FormField::new("closingTime", "Closing Time", FieldType::Time),
            FormField::new("seatingCapacity", "Seating Capacity", FieldType::Number),
            FormField::new("offersDelivery", "Offers Delivery", FieldType::Boolean).with_optional(),
            FormField::new("deliveryRadius", "Delivery Radius (km)", FieldType::Number)
                .with_depends_on(DependsOn::new("offersDelivery", &["true"])),
            FormField::new("menu", "Menu", FieldType::File).with_optional(),
        ],
    );

    let cafes = BusinessSubcategory::new(
        "cafes",
        "Cafés",
        "Coffee shops, bakeries and tea rooms",
        vec![
            FormField::new("name", "Café Name", FieldType::Text),
            FormField::new("specialties", "Specialties", FieldType::MultiSelect)
                .with_options(&["Coffee", "Tea", "Pastries", "Breakfast", "Smoothies"]),
            FormField::new("openingTime", "Opening Time", FieldType::Time),
            FormField::new("wifiAvailable", "Wi-Fi Available", FieldType::Checkbox).with_optional(),
            FormField::new("outdoorSeating", "Outdoor Seating", FieldType::Boolean).with_optional(),
            FormField::new("photos", "Photos", FieldType::File).with_optional(),
        ],
    );

    BusinessCategory::new(
        "food_and_beverage",
        "Food & Beverage",
        "Restaurants, cafés and bars",
        vec![restaurants, cafes],
    )
    .with_gradient("from-amber-400 to-orange-600")
}

fn activities() -> BusinessCategory {
    let tours = BusinessSubcategory::new(
        "tours",
        "Tours",
        "Guided tours and excursions",
        vec![
            FormField::new("name", "Tour Name", FieldType::Text),
            FormField::new("duration", "Duration (hours)", FieldType::Number),
            FormField::new("difficulty", "Difficulty", FieldType::Select)
                .with_options(&["Easy", "Moderate", "Challenging"]),
            FormField::new("meetingPoint", "Meeting Point", FieldType::Map),
            FormField::new("groupSize", "Maximum Group Size", FieldType::Number),
            FormField::new("pricePerPerson", "Price per Person", FieldType::Price),
            FormField::new("languages", "Languages", FieldType::MultiSelect)
                .with_options(&["English", "Sinhala", "Tamil", "German", "French"]),
            FormField::new("includesTransport", "Includes Transport", FieldType::Boolean)
                .with_optional(),
        ],
    );

    let water_sports = BusinessSubcategory::new(
        "water_sports",
        "Water Sports",
        "Surfing, diving and other water activities",
        vec![
            FormField::new("name", "Business Name", FieldType::Text),
            FormField::new("activityType", "Activity Type", FieldType::Select)
                .with_options(&["Surfing", "Diving", "Snorkeling", "Kayaking"]),
            FormField::new("certificationLevel", "Required Certification", FieldType::Select)
                .with_options(&["Beginner", "Advanced", "Professional"])
                .with_depends_on(DependsOn::new("activityType", &["Diving"])),
            FormField::new("equipmentProvided", "Equipment Provided", FieldType::Checkbox)
                .with_optional(),
            FormField::new("pricePerSession", "Price per Session", FieldType::Price),
            FormField::new("location", "Location", FieldType::Map),
        ],
    );

    BusinessCategory::new(
        "activities",
        "Activities",
        "Tours, adventures and experiences",
        vec![tours, water_sports],
    )
    .with_gradient("from-emerald-400 to-teal-600")
}
