// Static page content. Nothing here changes at runtime.

pub const OWNER_NAME: &str = "Jitesh Borse";
pub const OWNER_INITIALS: &str = "JB";
pub const PORTRAIT_URL: &str =
    "https://image2url.com/r2/default/images/1769503442599-fa607461-3407-4adb-b139-9262c38e313e.jpeg";
pub const TAGLINE: &str = "Building scalable full-stack applications with MERN and modern web technologies, focused on clean code, solid system design, and impactful real-world solutions.";

pub const EMAIL: &str = "jitesh.borse007@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/jiteshborse";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/jiteshborse8083/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub icon: &'static str,
    pub text: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [Link; 3] = [
    Link { icon: "GH", text: "GitHub", href: GITHUB_URL },
    Link { icon: "in", text: "LinkedIn", href: LINKEDIN_URL },
    Link { icon: "✉", text: "Email", href: "mailto:jitesh.borse007@gmail.com" },
];

pub const CONTACT_LINKS: [Link; 3] = [
    Link { icon: "✉", text: EMAIL, href: "mailto:jitesh.borse007@gmail.com" },
    Link { icon: "in", text: "linkedin.com/in/jiteshborse8083", href: LINKEDIN_URL },
    Link { icon: "GH", text: "github.com/jiteshborse", href: GITHUB_URL },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub place: &'static str,
    pub period: &'static str,
    pub cgpa: &'static str,
    pub current: bool,
}

pub const EDUCATION: [Education; 2] = [
    Education {
        degree: "Master of Computer Application",
        institution: "MIT World Peace University",
        place: "Pune, India",
        period: "Expected 2026",
        cgpa: "7.82 / 10.00",
        current: true,
    },
    Education {
        degree: "Bachelor of Computer Application",
        institution: "K.T.H.M. College",
        place: "Nashik, India",
        period: "2020 - 2023",
        cgpa: "7.31 / 10.00",
        current: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: [SkillGroup; 6] = [
    SkillGroup {
        icon: "</>",
        title: "Languages",
        skills: &["Java", "C++", "Python", "JavaScript", "PHP"],
    },
    SkillGroup {
        icon: "🌐",
        title: "Frontend",
        skills: &["React.js", "Next.js", "HTML5/CSS3", "Tailwind CSS"],
    },
    SkillGroup {
        icon: ">_",
        title: "Backend",
        skills: &["Node.js", "PHP"],
    },
    SkillGroup {
        icon: "🗄",
        title: "Databases",
        skills: &["MySQL", "MongoDB", "Supabase"],
    },
    SkillGroup {
        icon: "⚙",
        title: "Tools",
        skills: &["Git", "GitHub", "VS Code", "Postman"],
    },
    SkillGroup {
        icon: "★",
        title: "Fundamentals",
        skills: &["Basic Data Structures & Algorithms", "Object-Oriented Programming"],
    },
];

/// Stagger between consecutive skill cards.
pub const SKILL_STAGGER_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub year: &'static str,
    pub placement: &'static str,
    pub summary: &'static str,
    pub team: &'static [&'static str],
    pub mentors: &'static [&'static str],
}

pub const ACHIEVEMENT: Achievement = Achievement {
    title: "HackMIT'25 IDEATHON",
    year: "2025",
    placement: "3rd Place Winner",
    summary: "Secured 3rd Place & Won 1st Appreciation Prize out of 90 teams at HackMIT'25 IDEATHON as Team Leader of TECH-MITians.",
    team: &["Rutuja Jadhav", "Nitin Govardhane", "Viren Shende", "Atharv Kulkarni"],
    mentors: &["Dr. Jalindar Gandal Sir", "Dr. Swapnil Goje Sir"],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub tech: &'static [&'static str],
    pub description: &'static str,
    pub link: &'static str,
    pub is_private: bool,
}

impl Project {
    /// Private projects have no public link to show.
    pub fn public_link(&self) -> Option<&'static str> {
        (!self.is_private).then_some(self.link)
    }
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Converso",
        tech: &["Next.js", "Supabase", "Tailwind CSS", "Clerk"],
        description: "Developed an AI-powered SaaS learning platform with real-time voice lessons, AI tutors, and subscription billing using Next.js and Supabase.",
        link: "#",
        is_private: true,
    },
    Project {
        title: "Smart Inventory System",
        tech: &["PHP", "MySQL", "Python", "Bootstrap"],
        description: "Developed an inventory management system with PHP and MySQL featuring real-time tracking, role-based access, low-stock alerts, and Python-based predictive analytics.",
        link: "https://github.com/jiteshborse/smart-inventory",
        is_private: false,
    },
    Project {
        title: "AI-Blogging Assistant",
        tech: &["React.js", "Node.js", "Gemini API", "MongoDB", "Tailwind"],
        description: "Developed an AI-powered content tool with automated blog generation and SEO optimization, increasing user retention by 20%.",
        link: "https://github.com/jiteshborse/AI-Blogging-Assistant",
        is_private: false,
    },
    Project {
        title: "AI-Job-Tracker",
        tech: &["React.js", "Node.js", "Fastify", "APIs"],
        description: "An AI-powered job tracking app that matches your resume with real job listings and manages applications intelligently.",
        link: "https://github.com/jiteshborse/AI-Job-Tracker",
        is_private: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_projects_hide_their_link() {
        let converso = &PROJECTS[0];
        assert!(converso.is_private);
        assert_eq!(converso.public_link(), None);
        assert_eq!(
            PROJECTS[1].public_link(),
            Some("https://github.com/jiteshborse/smart-inventory")
        );
    }

    #[test]
    fn skill_cards_stagger_up_to_half_a_second() {
        let last = (SKILL_GROUPS.len() as u32 - 1) * SKILL_STAGGER_MS;
        assert_eq!(last, 500);
    }
}
