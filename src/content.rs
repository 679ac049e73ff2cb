pub const OWNER_NAME: &str = "Kruy Monychotakna";
pub const TYPED_PHRASE: &str = "Data scientist + web developer";
pub const HERO_DESCRIPTION: &str = "Transforming data into insights and ideas into digital experiences. I bridge the gap between complex analytics and beautiful, functional web applications.";
pub const PROFILE_IMAGE: &str = "/pic.png";

/// Section anchors in document order.
pub static SECTION_IDS: [&str; 5] = ["home", "about", "projects", "skills", "contact"];

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub call_to_action: bool,
}

pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "About", href: "#about", call_to_action: false },
    NavItem { label: "Projects", href: "#projects", call_to_action: false },
    NavItem { label: "Skills", href: "#skills", call_to_action: false },
    NavItem { label: "Contact", href: "#contact", call_to_action: true },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    GitHub,
    LinkedIn,
}

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

pub static SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Chotakna?tab=overview&from=2025-09-01&to=2025-09-05",
        icon: SocialIcon::GitHub,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/kruy-mony-chotakna-9899112b8/",
        icon: SocialIcon::LinkedIn,
    },
];

pub static ABOUT_PARAGRAPHS: [&str; 3] = [
    "I am a dedicated frontend developer and data scientist with expertise in modern web technologies and statistical analysis. My technical proficiency spans HTML, CSS, JavaScript, React, and Python, enabling me to bridge the gap between data insights and user-centered design.",
    "What drives me is the intersection of analytical thinking and creative problem-solving. I excel at transforming complex datasets into meaningful visualizations and building responsive web applications that deliver exceptional user experiences.",
    "Based in Phnom Penh, Cambodia, I am committed to leveraging technology for meaningful impact while continuously expanding my expertise in emerging technologies and best practices.",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 5] = [
    Stat { value: "3rd", label: "Year Student" },
    Stat { value: "5+", label: "Projects" },
    Stat { value: "10+", label: "Technologies" },
    Stat { value: "100%", label: "Commitment" },
    Stat { value: "∞", label: "Learning" },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ProjectIcon {
    LineChart,
    Monitor,
    BarChart,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub icon: ProjectIcon,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Report Management system",
        description: "Developed a full-stack web application for uploading, analyzing, and visualizing CSV data. Built a dynamic dashboard with Next.js and React to display processed data, key metrics, and interactive charts, transforming raw files into actionable reports.",
        tags: &["Next.js", "React", "Chart.js", "Tailwind CSS"],
        icon: ProjectIcon::LineChart,
    },
    Project {
        title: "Room Booking System",
        description: "Modern, responsive frontend application for room reservation management. Features intuitive user interface design with seamless booking workflows and real-time availability updates.",
        tags: &["React", "HTML5", "JavaScript", "CSS3"],
        icon: ProjectIcon::Monitor,
    },
    Project {
        title: "Sales Forecasting Model",
        description: "Machine learning solution for predictive sales analytics using advanced statistical modeling. Implements data preprocessing, feature engineering, and model validation for accurate business forecasting.",
        tags: &["Python", "Scikit-Learn", "Pandas", "Matplotlib"],
        icon: ProjectIcon::BarChart,
    },
];

pub struct Skill {
    pub name: &'static str,
    /// Target fill, carried to the page as `data-width`.
    pub width: &'static str,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: [Skill; 4],
}

pub static SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Programming Languages",
        skills: [
            Skill { name: "Python", width: "90%" },
            Skill { name: "JavaScript", width: "85%" },
            Skill { name: "C/C++", width: "75%" },
            Skill { name: "SQL", width: "80%" },
        ],
    },
    SkillCategory {
        title: "Web Technologies",
        skills: [
            Skill { name: "HTML5/CSS3", width: "95%" },
            Skill { name: "React", width: "85%" },
            Skill { name: "Responsive Design", width: "90%" },
            Skill { name: "UI/UX Design", width: "80%" },
        ],
    },
    SkillCategory {
        title: "Data Science",
        skills: [
            Skill { name: "Data Analysis", width: "92%" },
            Skill { name: "Data Visualization", width: "87%" },
            Skill { name: "Statistical Analysis", width: "83%" },
            Skill { name: "Machine Learning", width: "78%" },
        ],
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ContactIcon {
    Mail,
    Phone,
    Chat,
    Person,
}

pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: ContactIcon,
}

pub static CONTACT_ITEMS: [ContactItem; 4] = [
    ContactItem { label: "Email", value: "chotakna@gmail.com", icon: ContactIcon::Mail },
    ContactItem { label: "Phone", value: "+855 93 806 187", icon: ContactIcon::Phone },
    ContactItem { label: "Telegram", value: "093 806 187", icon: ContactIcon::Chat },
    ContactItem { label: "Location", value: "Phnom Penh, Cambodia", icon: ContactIcon::Person },
];

pub const COLLABORATION_TEXT: &str = "I'm always interested in discussing new opportunities, whether it's data analysis projects, frontend development work, or educational initiatives. Let's connect and explore how we can work together to create impactful solutions.";
pub const MAILTO_HREF: &str = "mailto:chotakna@gmail.com?subject=Professional%20Inquiry&body=Hello%20Kruy,%0D%0A%0D%0AI%20would%20like%20to%20discuss...";
pub const FOOTER_TEXT: &str =
    "© 2025 Kruy Monychotakna. All rights reserved. | Crafted with expertise in Phnom Penh, Cambodia";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{navigation::parse_anchor, skill_bar::Percent};

    #[test]
    fn every_nav_item_targets_a_section() {
        for item in &NAV_ITEMS {
            let target = parse_anchor(item.href).expect("nav href is an in-page anchor");
            assert!(SECTION_IDS.contains(&target), "{} has no section", item.href);
        }
    }

    #[test]
    fn skill_widths_are_explicit_percentages() {
        for category in &SKILL_CATEGORIES {
            for skill in &category.skills {
                let parsed = Percent::parse(skill.width).expect("width parses");
                assert!(parsed > Percent::ZERO, "{} would render empty", skill.name);
                assert_eq!(parsed.to_string(), skill.width);
            }
        }
    }

    #[test]
    fn contact_form_is_a_mail_link() {
        assert!(MAILTO_HREF.starts_with("mailto:chotakna@gmail.com"));
        assert!(CONTACT_ITEMS.iter().any(|item| MAILTO_HREF.contains(item.value)));
    }
}
