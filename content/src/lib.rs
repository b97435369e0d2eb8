//! Static page content for the portfolio.
//!
//! This crate owns every literal the page renders: the owner profile, skills,
//! projects, certifications, and the handful of site-wide constants (storage
//! key, relay endpoint, asset paths). It has no UI dependency so the records
//! can be checked on their own and serialized for structured data.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::Serialize;

/// Site-wide constants shared by the page and its widgets.
pub mod site {
    /// Display name of the page owner.
    pub const OWNER_NAME: &str = "Hari Prasad Chinimilli";
    /// `localStorage` key holding the literal `light` or `dark`.
    pub const THEME_STORAGE_KEY: &str = "portfolio-theme";
    /// Third-party relay that receives the contact form.
    pub const FORM_RELAY_URL: &str = "https://formsubmit.co/hariprasadchinimilli18@gmail.com";
    /// Profile picture shown in the hero.
    pub const PROFILE_IMAGE: &str = "/profile.png";
    /// Image used once if the profile picture fails to load.
    pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
    /// Downloadable resume document.
    pub const RESUME_PATH: &str = "/Duplicate.pdf";
    /// Browser tab title.
    pub const PAGE_TITLE: &str = "Hari Prasad Chinimilli | Portfolio";
    /// Meta description for search engines and link previews.
    pub const PAGE_DESCRIPTION: &str =
        "Portfolio of Hari Prasad Chinimilli, aspiring data scientist and AI enthusiast.";
}

/// Biography and contact details of the page owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub subtitle: &'static str,
    pub about: &'static [&'static str],
    pub interests: &'static [&'static str],
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub linkedin_url: &'static str,
    pub linkedin_label: &'static str,
    pub github_url: &'static str,
    pub github_label: &'static str,
}

impl Profile {
    /// `mailto:` link for the owner's address.
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link for the owner's phone number.
    #[must_use]
    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

/// Icon drawn on a skill card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Code,
    Brain,
    Globe,
}

/// A skill with a self-assessed proficiency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, `0..=100`.
    pub level: u8,
    pub icon: SkillIcon,
}

/// A showcased project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub link: &'static str,
}

/// Body of a certification card: either one paragraph or a bullet list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CertSummary {
    Description(&'static str),
    Details(&'static [&'static str]),
}

/// A certification or achievement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub summary: CertSummary,
    pub student_id: Option<&'static str>,
    pub certificate_id: Option<&'static str>,
}

pub const PROFILE: Profile = Profile {
    name: site::OWNER_NAME,
    tagline: "Aspiring Data Scientist and AI Enthusiast with a passion for building innovative solutions",
    subtitle: "Final Year Computer Science & Data Science Student at KIET, specializing in AI, ML, and cutting-edge web technologies",
    about: &[
        "I'm a passionate Computer Science and Data Science student at Kakinada Institute of Engineering & Technology (KIET), \
         currently in my final year. My journey in technology is driven by curiosity and a desire to solve real-world problems \
         through innovative AI and ML solutions.",
        "With expertise in Python, machine learning algorithms, and modern web development frameworks, I focus on building \
         scalable applications that bridge the gap between complex data science concepts and user-friendly interfaces.",
    ],
    interests: &["AI/ML", "Data Science", "Web Development", "Python"],
    email: "hariprasadchinimilli18@gmail.com",
    phone: "9346416669",
    location: "Kakinada, Andhra Pradesh, India",
    linkedin_url: "https://www.linkedin.com/in/haripch/",
    linkedin_label: "linkedin.com/in/haripch",
    github_url: "https://github.com/Hari-1718",
    github_label: "github.com/Hari-1718",
};

pub const SKILLS: &[Skill] = &[
    Skill { name: "Python", level: 90, icon: SkillIcon::Code },
    Skill { name: "Machine Learning", level: 85, icon: SkillIcon::Brain },
    Skill { name: "Web Development", level: 80, icon: SkillIcon::Globe },
    Skill { name: "Generative AI & Prompt Engineering", level: 25, icon: SkillIcon::Brain },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "COVID-19 Regression Analysis",
        description: "Comprehensive regression analysis on COVID-19 dataset using Python, Pandas, and scikit-learn to predict trends and patterns.",
        image: "https://images.unsplash.com/photo-1584036561566-baf8f5f1b144?w=500&h=300&fit=crop",
        technologies: &["Python", "Pandas", "Scikit-learn", "Matplotlib"],
        link: "https://colab.research.google.com/github/Hari-1718/FMML_Project_and_Labs/blob/main/Regression_Project_6.ipynb",
    },
    Project {
        title: "Breast Cancer Prediction with MLP [IIIT-H]",
        description: "Developed an MLP classifier on 569-sample dataset, achieving 98.36% accuracy in predicting breast cancer diagnoses. \
                      Optimized model with GridSearchCV, attaining 97.39% F1 score via 5-fold cross-validation.",
        image: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=500&h=300&fit=crop",
        technologies: &["Python", "MLP", "GridSearchCV", "Cross-validation"],
        link: "https://colab.research.google.com/github/Hari-1718/FMML_Project_and_Labs/blob/main/FMML_Aug'23_Module%209(a)%20_Project_Breast_Cancer_Prediction_with_MLP.ipynb",
    },
    Project {
        title: "Movie Recommendation Engine [IIIT-H]",
        description: "Engineered a recommendation system using K-Means on 100,000+ ratings, achieving a silhouette score of 0.667 with 9 clusters. \
                      Trained a collaborative filtering model with FastAI, attaining an RMSE of 0.879.",
        image: "https://images.unsplash.com/photo-1489875347897-49f64b51c1f8?w=500&h=300&fit=crop",
        technologies: &["K-Means", "FastAI", "Collaborative Filtering", "Python"],
        link: "https://colab.research.google.com/github/Hari-1718/FMML_Project_and_Labs/blob/main/Module_7_Project.ipynb",
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Artificial Intelligence and Data Analytics",
        issuer: "Edunet Foundation, AICTE, Shell India",
        date: "2024",
        summary: CertSummary::Description(
            "Comprehensive certification covering AI fundamentals, machine learning algorithms, and data analytics techniques.",
        ),
        student_id: None,
        certificate_id: None,
    },
    Certification {
        title: "AI Intern – TechSaksham Program",
        issuer: "Edunet Foundation (Microsoft & SAP CSR)",
        date: "Dec 2024 - Jan 2025 · 2 mos (Remote)",
        summary: CertSummary::Details(&[
            "Completed an AI-focused internship under the TechSaksham initiative, a CSR program by Microsoft and SAP implemented by Edunet Foundation.",
            "Gained hands-on experience in AI/ML fundamentals, data preprocessing, and model building",
            "Developed practical applications using Python and real-world datasets",
            "Participated in expert sessions, assignments, and collaborative learning",
        ]),
        student_id: Some("STU66583fdd3b8621717059549"),
        certificate_id: Some("TSPIN24_590120"),
    },
];
