use yew::prelude::*;

use crate::content::{Link, Project, SkillGroup};
use crate::reveal::RevealSection;

#[derive(Properties, PartialEq)]
pub struct SocialIconProps {
    pub link: Link,
}

#[function_component(SocialIcon)]
pub fn social_icon(props: &SocialIconProps) -> Html {
    let Link { icon, text, href } = props.link;
    html! {
        <a class="social-icon" href={href} target="_blank" rel="noopener noreferrer" title={text}>
            {icon}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillCardProps {
    pub group: SkillGroup,
    pub delay_ms: u32,
}

/// Each card reveals on its own so the grid fills in with a stagger.
#[function_component(SkillCard)]
pub fn skill_card(props: &SkillCardProps) -> Html {
    let SkillGroup { icon, title, skills } = props.group;
    html! {
        <RevealSection class={classes!("skill-card")} duration_ms={700} delay_ms={props.delay_ms}>
            <div class="skill-icon">{icon}</div>
            <h3>{title}</h3>
            <div class="skill-tags">
                { for skills.iter().map(|skill| html! { <span key={*skill} class="skill-tag">{*skill}</span> }) }
            </div>
        </RevealSection>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    html! {
        <div class="project-card">
            <div class="project-body">
                <div class="project-tech">
                    { for project.tech.iter().map(|t| html! { <span key={*t} class="tech-pill">{*t}</span> }) }
                </div>
                <h3>{project.title}</h3>
                <p>{project.description}</p>
            </div>
            <div class="project-footer">
                {
                    match project.public_link() {
                        Some(href) => html! {
                            <a class="project-link" href={href} target="_blank" rel="noopener noreferrer">
                                {"View on GitHub ›"}
                            </a>
                        },
                        None => html! {
                            <span class="project-private">{"🔒 Private Repository"}</span>
                        },
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactInfoProps {
    pub link: Link,
}

#[function_component(ContactInfo)]
pub fn contact_info(props: &ContactInfoProps) -> Html {
    let Link { icon, text, href } = props.link;
    html! {
        <a class="contact-info" href={href} target="_blank" rel="noopener noreferrer">
            <div class="contact-info-icon">{icon}</div>
            <span>{text}</span>
        </a>
    }
}
