//! Static seed content, defined at process start.

use std::collections::BTreeMap;

use crate::records::{FounderRecord, ProjectRecord, ServiceRecord};

pub fn services() -> Vec<ServiceRecord> {
    vec![
        ServiceRecord {
            title: "Website Development".to_string(),
            description: "Custom, responsive websites built to modern standards: fast, \
                          accessible, and easy to maintain."
                .to_string(),
            icon: "🌐".to_string(),
        },
        ServiceRecord {
            title: "App Development".to_string(),
            description: "Android and iOS apps with solid backends, built for production \
                          from day one."
                .to_string(),
            icon: "📱".to_string(),
        },
        ServiceRecord {
            title: "Software & Automation".to_string(),
            description: "Automation tools and custom software that cut manual work and \
                          increase productivity."
                .to_string(),
            icon: "⚙️".to_string(),
        },
    ]
}

pub fn founder() -> FounderRecord {
    FounderRecord {
        name: "Avery Lindqvist".to_string(),
        father_name: "Mr. Nils Lindqvist".to_string(),
        title: "Founder & Lead Developer".to_string(),
        bio: "Software engineer helping startups and small businesses build digital \
              products that scale, across web and mobile."
            .to_string(),
        expertise: vec![
            "Web Development".to_string(),
            "Mobile Apps".to_string(),
            "Automation".to_string(),
            "System Design".to_string(),
            "UI/UX Design".to_string(),
        ],
        image: "images/founder.png".to_string(),
        contact: "hello@vitrine.studio".to_string(),
        social: BTreeMap::from([
            (
                "github".to_string(),
                "https://github.com/ezmode-games".to_string(),
            ),
            ("linkedin".to_string(), "#".to_string()),
        ]),
    }
}

pub fn projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: 1,
            title: "Simple Billing Software".to_string(),
            description: "Desktop billing app built for small shops to automate invoice \
                          generation."
                .to_string(),
            image: "images/project1.jpg".to_string(),
            category: "Desktop App".to_string(),
        },
        ProjectRecord {
            id: 2,
            title: "Price Tracker Automation".to_string(),
            description: "Web automation tool that gathers product listings and price data."
                .to_string(),
            image: "images/project2.jpg".to_string(),
            category: "Automation".to_string(),
        },
        ProjectRecord {
            id: 3,
            title: "E-Commerce Platform".to_string(),
            description: "Full-stack e-commerce solution with payment gateway integration."
                .to_string(),
            image: "images/project3.jpg".to_string(),
            category: "Web Development".to_string(),
        },
        ProjectRecord {
            id: 4,
            title: "Task Management App".to_string(),
            description: "Mobile app for team collaboration and task tracking.".to_string(),
            image: "images/project4.jpg".to_string(),
            category: "Mobile App".to_string(),
        },
    ]
}
