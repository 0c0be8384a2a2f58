//! Built-in sample records.
//!
//! Five well-known profiles used to seed demo stores and exercise the query
//! operations in tests. Their ids are short fixed strings rather than UUIDs;
//! records added at runtime get generated ids.

use crate::{GeoPoint, Profile, ProfileId, Socials, PLACEHOLDER_IMAGE};

/// The built-in sample collection, in seed order.
pub fn samples() -> Vec<Profile> {
    vec![
        Profile {
            id: ProfileId::from("1"),
            name: "Alex Johnson".to_owned(),
            image: PLACEHOLDER_IMAGE.to_owned(),
            description: "Software Developer with 5 years of experience in web technologies."
                .to_owned(),
            address: "123 Tech Street, San Francisco, CA".to_owned(),
            email: Some("alex@example.com".to_owned()),
            phone: Some("555-123-4567".to_owned()),
            profession: Some("Software Developer".to_owned()),
            city: Some("San Francisco".to_owned()),
            interests: vec![
                "coding".to_owned(),
                "hiking".to_owned(),
                "photography".to_owned(),
            ],
            socials: Socials {
                twitter: Some("alexj".to_owned()),
                linkedin: Some("alexjohnson".to_owned()),
                facebook: None,
            },
            location: Some(GeoPoint::new(37.7749, -122.4194)),
        },
        Profile {
            id: ProfileId::from("2"),
            name: "Maria Garcia".to_owned(),
            image: PLACEHOLDER_IMAGE.to_owned(),
            description: "Experienced marketing professional specialized in digital campaigns."
                .to_owned(),
            address: "456 Market Ave, New York, NY".to_owned(),
            email: Some("maria@example.com".to_owned()),
            phone: Some("555-987-6543".to_owned()),
            profession: Some("Marketing Manager".to_owned()),
            city: Some("New York".to_owned()),
            interests: vec![
                "marketing".to_owned(),
                "travel".to_owned(),
                "cooking".to_owned(),
            ],
            socials: Socials {
                twitter: Some("mariag".to_owned()),
                linkedin: Some("mariagarcia".to_owned()),
                facebook: Some("maria.garcia".to_owned()),
            },
            location: Some(GeoPoint::new(40.7128, -74.0060)),
        },
        Profile {
            id: ProfileId::from("3"),
            name: "David Wilson".to_owned(),
            image: PLACEHOLDER_IMAGE.to_owned(),
            description: "Architect with a passion for sustainable design solutions.".to_owned(),
            address: "789 Design Blvd, Chicago, IL".to_owned(),
            email: Some("david@example.com".to_owned()),
            phone: Some("555-456-7890".to_owned()),
            profession: Some("Architect".to_owned()),
            city: Some("Chicago".to_owned()),
            interests: vec![
                "architecture".to_owned(),
                "sustainability".to_owned(),
                "drawing".to_owned(),
            ],
            socials: Socials {
                twitter: None,
                linkedin: Some("davidwilson".to_owned()),
                facebook: None,
            },
            location: Some(GeoPoint::new(41.8781, -87.6298)),
        },
        Profile {
            id: ProfileId::from("4"),
            name: "Sarah Lee".to_owned(),
            image: PLACEHOLDER_IMAGE.to_owned(),
            description: "Healthcare professional specializing in patient care and management."
                .to_owned(),
            address: "101 Medical Drive, Boston, MA".to_owned(),
            email: Some("sarah@example.com".to_owned()),
            phone: Some("555-234-5678".to_owned()),
            profession: Some("Nurse Practitioner".to_owned()),
            city: Some("Boston".to_owned()),
            interests: vec![
                "healthcare".to_owned(),
                "reading".to_owned(),
                "yoga".to_owned(),
            ],
            socials: Socials {
                twitter: None,
                linkedin: Some("sarahlee".to_owned()),
                facebook: Some("sarah.lee".to_owned()),
            },
            location: Some(GeoPoint::new(42.3601, -71.0589)),
        },
        Profile {
            id: ProfileId::from("5"),
            name: "James Brown".to_owned(),
            image: PLACEHOLDER_IMAGE.to_owned(),
            description: "Finance analyst with expertise in investment strategies.".to_owned(),
            address: "202 Finance Street, Seattle, WA".to_owned(),
            email: Some("james@example.com".to_owned()),
            phone: Some("555-876-5432".to_owned()),
            profession: Some("Financial Analyst".to_owned()),
            city: Some("Seattle".to_owned()),
            interests: vec![
                "finance".to_owned(),
                "investing".to_owned(),
                "running".to_owned(),
            ],
            socials: Socials {
                twitter: Some("jamesbrown".to_owned()),
                linkedin: Some("jamesbrown".to_owned()),
                facebook: None,
            },
            location: Some(GeoPoint::new(47.6062, -122.3321)),
        },
    ]
}
