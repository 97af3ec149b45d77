//! Built-in sample profiles loaded at startup.

use pmx_core::profile::{Address, Coordinates, Profile, ProfileId};

#[allow(clippy::too_many_arguments)]
fn sample(
    id: u32,
    name: &str,
    email: &str,
    avatar: &str,
    street: &str,
    city: &str,
    (longitude, latitude): (f64, f64),
    bio: &str,
) -> Profile {
    Profile {
        id: ProfileId(id),
        name: name.to_string(),
        email: email.to_string(),
        avatar: avatar.to_string(),
        bio: bio.to_string(),
        address: Address {
            street: street.to_string(),
            city: city.to_string(),
            coordinates: Coordinates::new(longitude, latitude),
        },
        interests: Vec::new(),
        phone: None,
        website: None,
        social: None,
    }
}

/// The three sample profiles, ids 1 to 3.
pub fn seed_profiles() -> Vec<Profile> {
    vec![
        sample(
            1,
            "Sarah Johnson",
            "sarah.j@example.com",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150",
            "123 Tech Lane",
            "San Francisco, CA",
            (-122.4194, 37.7749),
            "Full-stack developer passionate about creating intuitive user experiences",
        ),
        sample(
            2,
            "Michael Chen",
            "m.chen@example.com",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150",
            "456 Innovation Ave",
            "Seattle, WA",
            (-122.3321, 47.6062),
            "UX designer with a focus on accessible design solutions",
        ),
        sample(
            3,
            "Emma Wilson",
            "emma.w@example.com",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150",
            "789 Startup Blvd",
            "Austin, TX",
            (-97.7431, 30.2672),
            "Product manager specializing in agile methodologies",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<u32> = seed_profiles().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_seed_cities() {
        let cities: Vec<String> = seed_profiles()
            .into_iter()
            .map(|p| p.address.city)
            .collect();
        assert_eq!(cities, vec!["San Francisco, CA", "Seattle, WA", "Austin, TX"]);
    }
}
