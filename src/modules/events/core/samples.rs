use crate::modules::events::core::event::NewEvent;

const SAMPLES: [(&str, &str, &str, &str, &str); 5] = [
    (
        "Summer Music Festival",
        "2025-08-20",
        "Central Park, New York",
        "A vibrant summer music festival featuring top artists",
        "Music",
    ),
    (
        "Food & Wine Festival",
        "2025-09-15",
        "Napa Valley, California",
        "Celebrate culinary excellence with world-class chefs",
        "Food",
    ),
    (
        "Art & Culture Festival",
        "2025-10-05",
        "Museum District, Houston",
        "Explore contemporary art and cultural exhibitions",
        "Art",
    ),
    (
        "Tech Innovation Summit",
        "2025-11-12",
        "Silicon Valley, California",
        "Discover the latest in technology and innovation",
        "Technology",
    ),
    (
        "Holiday Light Festival",
        "2025-12-18",
        "Downtown Seattle, Washington",
        "Magical holiday light displays and winter celebrations",
        "Holiday",
    ),
];

/// Events inserted into an empty store at startup.
pub fn sample_events() -> Vec<NewEvent> {
    SAMPLES
        .iter()
        .map(|(name, date, location, description, category)| NewEvent {
            name: name.to_string(),
            date: date.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        })
        .collect()
}
