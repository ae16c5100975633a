use crate::models::{Course, CourseLevel};

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    provider: &str,
    url: &str,
    skills: &[&str],
    level: CourseLevel,
    duration: &str,
    rating: f32,
    price: &str,
    description: &str,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        provider: provider.to_string(),
        url: url.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        level,
        duration: duration.to_string(),
        rating,
        price: price.to_string(),
        is_free: price == "Free",
        description: description.to_string(),
    }
}

/// The built-in course catalog used for local matching and job defaults.
pub fn course_catalog() -> Vec<Course> {
    use CourseLevel::*;

    vec![
        course(
            "1",
            "React for Beginners",
            "Coursera",
            "https://coursera.org",
            &["react", "javascript", "frontend"],
            Beginner,
            "12h",
            4.8,
            "Free",
            "Learn React from scratch with hands-on projects and real-world examples.",
        ),
        course(
            "2",
            "Advanced React Patterns",
            "Udemy",
            "https://udemy.com",
            &["react", "hooks", "performance"],
            Advanced,
            "15h",
            4.9,
            "$89.99",
            "Master advanced React patterns and optimization techniques.",
        ),
        course(
            "3",
            "Data Structures in Python",
            "edX",
            "https://edx.org",
            &["python", "algorithms"],
            Intermediate,
            "8h",
            4.7,
            "Free",
            "Comprehensive guide to data structures and algorithms in Python.",
        ),
        course(
            "4",
            "Machine Learning Foundations",
            "Coursera",
            "https://coursera.org",
            &["ml", "python"],
            Beginner,
            "20h",
            4.6,
            "$49.99",
            "Introduction to machine learning concepts and applications.",
        ),
        course(
            "5",
            "DevOps Essentials",
            "Udacity",
            "https://udacity.com",
            &["devops", "ci/cd", "docker"],
            Intermediate,
            "16h",
            4.5,
            "Free",
            "Learn DevOps practices and tools for modern software development.",
        ),
        course(
            "6",
            "AWS Cloud Practitioner",
            "AWS Training",
            "https://aws.amazon.com",
            &["aws", "cloud", "certification"],
            Beginner,
            "10h",
            4.8,
            "Free",
            "Prepare for the AWS Cloud Practitioner certification exam.",
        ),
        course(
            "7",
            "JavaScript Mastery",
            "Udemy",
            "https://udemy.com",
            &["javascript", "es6", "async"],
            Intermediate,
            "18h",
            4.9,
            "$79.99",
            "Master modern JavaScript including ES6+, async/await, and advanced patterns.",
        ),
        course(
            "8",
            "TypeScript Fundamentals",
            "Pluralsight",
            "https://pluralsight.com",
            &["typescript", "javascript"],
            Intermediate,
            "10h",
            4.7,
            "Free",
            "Learn TypeScript from the ground up with practical examples.",
        ),
        course(
            "9",
            "Node.js Backend Development",
            "Coursera",
            "https://coursera.org",
            &["node.js", "backend", "api"],
            Advanced,
            "25h",
            4.8,
            "$99.99",
            "Build scalable backend applications with Node.js and Express.",
        ),
        course(
            "10",
            "Docker & Kubernetes",
            "Udemy",
            "https://udemy.com",
            &["docker", "kubernetes", "devops"],
            Intermediate,
            "14h",
            4.6,
            "$69.99",
            "Master containerization and orchestration with Docker and Kubernetes.",
        ),
    ]
}
