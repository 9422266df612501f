use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::cards::{ContactInfo, ProjectCard, SkillCard, SocialIcon};
use crate::components::contact_form::ContactForm;
use crate::components::nav::Nav;
use crate::content::{
    ACHIEVEMENT, CONTACT_LINKS, EDUCATION, GITHUB_URL, LINKEDIN_URL, OWNER_INITIALS, OWNER_NAME,
    PORTRAIT_URL, PROJECTS, SKILL_GROUPS, SKILL_STAGGER_MS, SOCIAL_LINKS, TAGLINE,
};
use crate::navigation::{scroll_to_section, use_scroll_tracking, SectionId};
use crate::reveal::RevealSection;

#[function_component(Home)]
pub fn home() -> Html {
    let scroll = use_scroll_tracking();
    let menu_open = use_state(|| false);

    let navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |id: SectionId| {
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let go_to = |id: SectionId| {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(id))
    };

    let year = chrono::Local::now().year();

    html! {
        <div class="portfolio">
            <style>{PAGE_STYLES}</style>

            <Nav
                scroll={scroll}
                menu_open={*menu_open}
                on_toggle_menu={toggle_menu}
                on_navigate={navigate.clone()}
            />

            <section id={SectionId::Home.as_str()} class="hero">
                <div class="hero-blob hero-blob-left"></div>
                <div class="hero-blob hero-blob-right"></div>
                <div class="container hero-grid">
                    <div class="hero-text">
                        <h2 class="eyebrow">{"Welcome to my space"}</h2>
                        <h1>{"Hi, I'm "}<span class="gradient-text">{OWNER_NAME}</span></h1>
                        <p class="hero-tagline">{TAGLINE}</p>
                        <div class="hero-actions">
                            <button class="cta-button" onclick={go_to(SectionId::Projects)}>
                                {"Explore Work "}<span class="arrow">{"›"}</span>
                            </button>
                            <div class="social-row">
                                { for SOCIAL_LINKS.iter().map(|link| html! { <SocialIcon link={*link} /> }) }
                            </div>
                        </div>
                    </div>
                    <div class="hero-portrait">
                        <div class="portrait-glow"></div>
                        <div class="portrait-frame float">
                            <img src={PORTRAIT_URL} alt={OWNER_NAME} />
                        </div>
                    </div>
                </div>
            </section>

            <section id={SectionId::About.as_str()} class="section section-light">
                <RevealSection class={classes!("container")}>
                    <div class="section-heading">
                        <h2>{"About Me"}</h2>
                        <div class="heading-bar"></div>
                    </div>
                    <div class="two-col">
                        <div class="panel">
                            <div class="panel-title">
                                <div class="panel-icon">{"🎓"}</div>
                                <h3>{"Academic Path"}</h3>
                            </div>
                            <div class="timeline">
                                { for EDUCATION.iter().map(|entry| html! {
                                    <div key={entry.degree} class={classes!("timeline-item", entry.current.then_some("current"))}>
                                        <div class="timeline-dot"></div>
                                        <h4>{entry.degree}</h4>
                                        <p class="institution">{entry.institution}</p>
                                        <div class="timeline-meta">
                                            <span>{entry.place}</span>
                                            <span class="period">{entry.period}</span>
                                        </div>
                                        <p class="cgpa">{format!("CGPA: {}", entry.cgpa)}</p>
                                    </div>
                                }) }
                            </div>
                        </div>
                        <div class="panel">
                            <div class="panel-title">
                                <div class="panel-icon">{"👤"}</div>
                                <h3>{"Personality Summary"}</h3>
                            </div>
                            <p class="summary">
                                {"I am an MCA student (Batch 2024–26) at MIT World Peace University, aspiring to build a career in Software Engineering. I have a strong foundation in "}
                                <span class="highlight">{"Java, C++, SQL"}</span>
                                {", and hands-on experience with "}
                                <span class="highlight">{"MERN Stack"}</span>
                                {" development."}
                            </p>
                            <p class="summary">
                                {"Recently, I secured "}<strong>{"3rd place"}</strong>
                                {" among 90 teams at "}<em>{"HackMIT'25 IDEATHON"}</em>
                                {" and won the 1st Appreciation Prize, gaining valuable experience in teamwork and problem-solving."}
                            </p>
                        </div>
                    </div>
                </RevealSection>
            </section>

            <section id={SectionId::Skills.as_str()} class="section">
                <RevealSection class={classes!("container")}>
                    <div class="section-heading">
                        <h2>{"Core Competencies"}</h2>
                        <p class="muted">{"The technical toolkit I bring to every project."}</p>
                    </div>
                    <div class="skill-grid">
                        { for SKILL_GROUPS.iter().zip(0u32..).map(|(group, index)| html! {
                            <SkillCard key={group.title} group={*group} delay_ms={index * SKILL_STAGGER_MS} />
                        }) }
                    </div>
                </RevealSection>
            </section>

            <section id={SectionId::Achievements.as_str()} class="section section-light">
                <RevealSection class={classes!("container")}>
                    <div class="section-heading">
                        <h2>{"Achievements & Recognition"}</h2>
                        <div class="heading-bar"></div>
                    </div>
                    <div class="achievement-card">
                        <div class="achievement-watermark">{"🏆"}</div>
                        <div class="achievement-header">
                            <div class="achievement-icon">{"🏆"}</div>
                            <div>
                                <h3>{ACHIEVEMENT.title}</h3>
                                <div class="achievement-meta">
                                    <span>{format!("📅 {}", ACHIEVEMENT.year)}</span>
                                    <span class="dot"></span>
                                    <span class="placement">{format!("⚡ {}", ACHIEVEMENT.placement)}</span>
                                </div>
                            </div>
                        </div>
                        <p class="achievement-summary">{ACHIEVEMENT.summary}</p>
                        <div class="two-col">
                            <div>
                                <div class="people-heading">{"👥 Team Members"}</div>
                                <div class="people-grid">
                                    { for ACHIEVEMENT.team.iter().map(|member| html! { <div key={*member} class="person">{*member}</div> }) }
                                </div>
                            </div>
                            <div>
                                <div class="people-heading mentors">{"★ Mentors & Guides"}</div>
                                <div class="people-wrap">
                                    { for ACHIEVEMENT.mentors.iter().map(|mentor| html! { <div key={*mentor} class="person mentor">{*mentor}</div> }) }
                                </div>
                            </div>
                        </div>
                    </div>
                </RevealSection>
            </section>

            <section id={SectionId::Projects.as_str()} class="section">
                <RevealSection class={classes!("container")}>
                    <div class="projects-heading">
                        <div>
                            <h2>{"Featured Projects"}</h2>
                            <p class="muted">{"Highlighting my technical depth through web development."}</p>
                        </div>
                        <a class="all-work" href={GITHUB_URL} target="_blank" rel="noopener noreferrer">{"All Work ›"}</a>
                    </div>
                    <div class="two-col">
                        { for PROJECTS.iter().map(|project| html! { <ProjectCard key={project.title} project={*project} /> }) }
                    </div>
                </RevealSection>
            </section>

            <section id={SectionId::Contact.as_str()} class="section section-dark">
                <RevealSection class={classes!("container")}>
                    <div class="two-col contact-grid">
                        <div>
                            <h2 class="contact-title">
                                {"Ready to build something "}<span class="accent">{"extraordinary?"}</span>
                            </h2>
                            <p class="contact-lead">
                                {"I'm currently available for internships and freelance projects. Let's start a conversation."}
                            </p>
                            <div class="contact-links">
                                { for CONTACT_LINKS.iter().map(|link| html! { <ContactInfo link={*link} /> }) }
                            </div>
                        </div>
                        <ContactForm />
                    </div>
                </RevealSection>
            </section>

            <footer class="footer">
                <div class="container footer-row">
                    <div class="footer-logo" onclick={go_to(SectionId::Home)}>{OWNER_INITIALS}</div>
                    <p>{format!("© {} {} | Crafted with passion & love.", year, OWNER_NAME)}</p>
                    <div class="footer-links">
                        <a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                        <a href={GITHUB_URL} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                    </div>
                </div>
            </footer>
        </div>
    }
}

const PAGE_STYLES: &str = r#"
    * { box-sizing: border-box; }
    body { margin: 0; }
    .portfolio {
        min-height: 100vh;
        background: #f8fafc;
        color: #0f172a;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .portfolio ::selection { background: #e0e7ff; color: #4338ca; }
    .container { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
    .muted { color: #64748b; }

    @keyframes float {
        0% { transform: translateY(0px); }
        50% { transform: translateY(-15px); }
        100% { transform: translateY(0px); }
    }
    .float { animation: float 5s ease-in-out infinite; }
    @keyframes spin { to { transform: rotate(360deg); } }

    /* nav */
    .nav-wrapper {
        position: fixed;
        top: 1.25rem;
        left: 0;
        right: 0;
        z-index: 50;
        display: flex;
        justify-content: center;
        padding: 0 1rem;
    }
    .nav-anchor { position: relative; }
    .nav-pill {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.375rem;
        background: rgba(2, 6, 23, 0.9);
        backdrop-filter: blur(24px);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 9999px;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        transition: transform 0.5s ease;
    }
    .nav-pill.compact { transform: scale(0.95); }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.6rem;
        padding: 0.25rem 0.75rem 0.25rem 0.375rem;
        cursor: pointer;
        border-right: 1px solid rgba(255, 255, 255, 0.1);
    }
    .nav-badge {
        width: 2rem;
        height: 2rem;
        border-radius: 9999px;
        background: linear-gradient(to top right, #6366f1, #a855f7);
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        font-weight: 700;
        font-size: 11px;
    }
    .nav-title { color: #fff; font-weight: 700; font-size: 0.875rem; }
    .nav-burger { display: none; color: #94a3b8; }
    .nav-icons { display: flex; align-items: center; gap: 0.25rem; padding: 0 0.375rem; }
    .nav-icon {
        position: relative;
        padding: 0.6rem;
        border: none;
        border-radius: 9999px;
        background: transparent;
        color: #94a3b8;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .nav-icon:hover { color: #fff; background: rgba(255, 255, 255, 0.05); }
    .nav-icon.active { background: #4f46e5; color: #fff; }
    .nav-tooltip {
        position: absolute;
        bottom: -2.5rem;
        left: 50%;
        transform: translateX(-50%);
        background: #1e293b;
        color: #fff;
        font-size: 9px;
        font-weight: 700;
        padding: 0.25rem 0.5rem;
        border-radius: 0.25rem;
        opacity: 0;
        pointer-events: none;
        white-space: nowrap;
        transition: opacity 0.2s ease;
    }
    .nav-icon:hover .nav-tooltip { opacity: 1; }
    .nav-resume { padding-left: 0.5rem; border-left: 1px solid rgba(255, 255, 255, 0.1); }
    .nav-resume a {
        display: inline-block;
        background: #fff;
        color: #0f172a;
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        font-size: 11px;
        font-weight: 700;
        text-decoration: none;
    }
    .nav-resume a:hover { background: #6366f1; color: #fff; }
    .mobile-menu {
        position: absolute;
        top: 4rem;
        left: 0;
        width: 240px;
        display: flex;
        flex-direction: column;
        gap: 0.25rem;
        padding: 1rem;
        background: rgba(2, 6, 23, 0.95);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1.5rem;
    }
    .mobile-nav-item {
        display: flex;
        align-items: center;
        gap: 1rem;
        width: 100%;
        padding: 0.75rem;
        border: 1px solid transparent;
        border-radius: 1rem;
        background: transparent;
        color: #94a3b8;
        font-weight: 700;
        cursor: pointer;
    }
    .mobile-nav-item.active {
        background: rgba(79, 70, 229, 0.2);
        border-color: rgba(99, 102, 241, 0.3);
        color: #fff;
    }
    .mobile-nav-item.active .mobile-nav-icon { color: #818cf8; }
    @media (max-width: 768px) {
        .nav-icons { display: none; }
        .nav-burger { display: inline; }
    }
    @media (min-width: 769px) {
        .mobile-menu { display: none; }
    }

    /* hero */
    .hero { position: relative; padding: 12rem 1rem 6rem; overflow: hidden; }
    .hero-blob { position: absolute; border-radius: 9999px; filter: blur(64px); opacity: 0.5; z-index: 0; }
    .hero-blob-left { top: 5rem; left: 2.5rem; width: 16rem; height: 16rem; background: #e0e7ff; }
    .hero-blob-right { bottom: 0; right: 2.5rem; width: 24rem; height: 24rem; background: #faf5ff; }
    .hero-grid { position: relative; display: flex; align-items: center; gap: 4rem; }
    .hero-text { flex: 1; }
    .eyebrow { color: #4f46e5; font-weight: 700; text-transform: uppercase; letter-spacing: 0.2em; font-size: 0.875rem; }
    .hero h1 { font-size: 4rem; font-weight: 800; line-height: 1.1; margin: 0.75rem 0; }
    .gradient-text {
        background: linear-gradient(to right, #4f46e5, #9333ea);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-tagline { font-size: 1.25rem; color: #475569; max-width: 36rem; line-height: 1.6; }
    .hero-actions { display: flex; flex-wrap: wrap; gap: 1.25rem; margin-top: 2rem; }
    .cta-button {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        border: none;
        border-radius: 9999px;
        background: #4f46e5;
        color: #fff;
        font-weight: 700;
        font-size: 1rem;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .cta-button:hover { background: #4338ca; box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }
    .cta-button:hover .arrow { transform: translateX(4px); }
    .arrow { transition: transform 0.3s ease; }
    .social-row { display: flex; align-items: center; gap: 1rem; }
    .social-icon {
        padding: 0.75rem;
        background: #fff;
        border: 1px solid #e2e8f0;
        border-radius: 1rem;
        color: #475569;
        font-weight: 700;
        text-decoration: none;
        transition: all 0.3s ease;
    }
    .social-icon:hover { color: #4f46e5; border-color: #c7d2fe; transform: translateY(-4px); }
    .hero-portrait { position: relative; }
    .portrait-glow {
        position: absolute;
        inset: -1rem;
        background: linear-gradient(to top right, #6366f1, #a855f7);
        border-radius: 9999px;
        filter: blur(40px);
        opacity: 0.2;
    }
    .portrait-frame {
        position: relative;
        width: 450px;
        height: 450px;
        border-radius: 9999px;
        overflow: hidden;
        border: 8px solid #fff;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    }
    .portrait-frame img { width: 100%; height: 100%; object-fit: cover; }
    @media (max-width: 768px) {
        .hero-grid { flex-direction: column; }
        .hero h1 { font-size: 3rem; }
        .portrait-frame { width: 20rem; height: 20rem; }
    }

    /* sections */
    .section { padding: 6rem 0; background: #f8fafc; }
    .section-light { background: #fff; }
    .section-dark { background: #0f172a; color: #fff; position: relative; overflow: hidden; }
    .section-heading { display: flex; flex-direction: column; align-items: center; text-align: center; margin-bottom: 4rem; }
    .section-heading h2, .projects-heading h2 { font-size: 2.25rem; font-weight: 700; margin: 0 0 1rem; }
    .heading-bar { height: 0.375rem; width: 4rem; border-radius: 9999px; background: linear-gradient(to right, #4f46e5, #9333ea); }
    .two-col { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 2.5rem; }
    @media (max-width: 768px) { .two-col { grid-template-columns: 1fr; } }

    .panel {
        padding: 2rem;
        border-radius: 1.5rem;
        background: #f8fafc;
        border: 1px solid #f1f5f9;
        transition: all 0.5s ease;
    }
    .panel:hover { background: #fff; border-color: #e0e7ff; box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }
    .panel-title { display: flex; align-items: center; gap: 1rem; color: #4f46e5; margin-bottom: 2rem; }
    .panel-icon { padding: 0.75rem; background: #eef2ff; border-radius: 1rem; font-size: 1.5rem; }
    .timeline { display: flex; flex-direction: column; gap: 2rem; }
    .timeline-item { position: relative; padding-left: 1.5rem; border-left: 2px solid #e2e8f0; }
    .timeline-item:hover { border-color: #818cf8; }
    .timeline-dot {
        position: absolute;
        left: -9px;
        top: 0;
        width: 1rem;
        height: 1rem;
        border-radius: 9999px;
        background: #fff;
        border: 2px solid #cbd5e1;
    }
    .timeline-item.current .timeline-dot { border-color: #4f46e5; }
    .timeline-item h4 { margin: 0; font-size: 1.125rem; }
    .institution { color: #334155; font-weight: 500; margin: 0.25rem 0; }
    .timeline-meta { display: flex; justify-content: space-between; font-size: 0.875rem; color: #64748b; }
    .timeline-item.current .period { color: #4f46e5; font-weight: 600; font-style: italic; }
    .cgpa {
        width: fit-content;
        margin-top: 0.5rem;
        padding: 0.25rem 0.75rem;
        border-radius: 0.5rem;
        background: #eef2ff;
        color: rgba(79, 70, 229, 0.8);
        font-weight: 700;
        font-size: 0.875rem;
    }
    .summary { color: #475569; line-height: 1.7; font-size: 1.125rem; }
    .highlight { color: #4f46e5; font-weight: 600; }

    .skill-grid { display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 2rem; }
    @media (max-width: 1024px) { .skill-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); } }
    @media (max-width: 640px) { .skill-grid { grid-template-columns: 1fr; } }
    .skill-card {
        background: #fff;
        padding: 2rem;
        border-radius: 1.5rem;
        border: 1px solid #e2e8f0;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .skill-card:hover { border-color: #c7d2fe; box-shadow: 0 25px 50px -12px rgba(224, 231, 255, 1); }
    .skill-icon { padding: 1rem; background: #f8fafc; border-radius: 1rem; width: fit-content; margin-bottom: 1.5rem; font-size: 1.5rem; }
    .skill-card h3 { font-size: 1.25rem; margin: 0 0 1rem; }
    .skill-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .skill-tag {
        padding: 0.375rem 0.75rem;
        background: #f8fafc;
        color: #475569;
        font-size: 0.75rem;
        font-weight: 700;
        border-radius: 0.5rem;
        border: 1px solid #f1f5f9;
    }

    .achievement-card {
        position: relative;
        overflow: hidden;
        max-width: 56rem;
        margin: 0 auto;
        padding: 3rem;
        background: #fff;
        border: 2px solid #f1f5f9;
        border-radius: 2.5rem;
        transition: all 0.5s ease;
    }
    .achievement-card:hover { border-color: #e0e7ff; box-shadow: 0 25px 50px -12px #eef2ff; }
    .achievement-watermark { position: absolute; top: 0; right: 0; font-size: 12rem; opacity: 0.05; }
    .achievement-header { display: flex; align-items: center; gap: 1.5rem; }
    .achievement-icon { padding: 1.25rem; background: #eef2ff; border-radius: 1.5rem; font-size: 2.5rem; }
    .achievement-header h3 { font-size: 1.875rem; font-weight: 800; margin: 0; }
    .achievement-meta { display: flex; align-items: center; gap: 0.75rem; margin-top: 0.25rem; color: #64748b; font-weight: 600; }
    .dot { width: 6px; height: 6px; border-radius: 9999px; background: #cbd5e1; }
    .placement { color: #f97316; text-transform: uppercase; letter-spacing: 0.05em; font-size: 0.75rem; font-weight: 700; }
    .achievement-summary { color: #475569; line-height: 1.7; font-size: 1.125rem; font-weight: 500; margin: 2rem 0; }
    .people-heading { color: #4f46e5; font-weight: 800; font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.1em; margin-bottom: 1rem; }
    .people-heading.mentors { color: #9333ea; }
    .people-grid { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 0.75rem; }
    .people-wrap { display: flex; flex-wrap: wrap; gap: 0.75rem; }
    .person {
        padding: 0.6rem 1rem;
        background: #f8fafc;
        border: 1px solid #f1f5f9;
        border-radius: 0.75rem;
        color: #334155;
        font-size: 0.875rem;
        font-weight: 600;
    }
    .person.mentor { background: #faf5ff; border-color: #f3e8ff; color: #7e22ce; }

    .projects-heading { display: flex; align-items: flex-end; justify-content: space-between; gap: 2rem; margin-bottom: 4rem; }
    .all-work {
        padding: 0.6rem 1.5rem;
        border-radius: 0.75rem;
        background: #fff;
        color: #4f46e5;
        font-size: 0.875rem;
        font-weight: 700;
        text-decoration: none;
        box-shadow: 0 10px 15px -3px #e0e7ff;
    }
    .project-card {
        display: flex;
        flex-direction: column;
        height: 100%;
        padding: 2.5rem;
        border: 2px solid #f1f5f9;
        border-radius: 3rem;
        background: rgba(248, 250, 252, 0.5);
        transition: all 0.5s ease;
    }
    .project-card:hover { background: #fff; border-color: #e0e7ff; box-shadow: 0 25px 50px -12px #eef2ff; }
    .project-card:hover h3 { color: #4f46e5; }
    .project-body { flex-grow: 1; }
    .project-tech { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .tech-pill {
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: #eef2ff;
        color: #6366f1;
        font-size: 10px;
        font-weight: 800;
        text-transform: uppercase;
        letter-spacing: 0.1em;
    }
    .project-card h3 { font-size: 1.875rem; font-weight: 800; transition: color 0.3s ease; }
    .project-card p { color: #64748b; line-height: 1.7; font-size: 1.125rem; }
    .project-footer { margin-top: 2rem; }
    .project-link { color: #4f46e5; font-weight: 700; text-decoration: none; border-bottom: 2px solid transparent; padding-bottom: 0.25rem; }
    .project-link:hover { border-color: #4f46e5; }
    .project-private { color: #94a3b8; font-weight: 700; font-style: italic; }

    /* contact */
    .contact-grid { gap: 5rem; }
    .contact-title { font-size: 3rem; font-weight: 700; line-height: 1.2; margin: 0 0 1.5rem; }
    .accent { color: #818cf8; }
    .contact-lead { color: #94a3b8; font-size: 1.25rem; line-height: 1.6; }
    .contact-links { display: flex; flex-direction: column; gap: 1.5rem; margin-top: 2.5rem; }
    .contact-info { display: flex; align-items: center; gap: 1.5rem; text-decoration: none; }
    .contact-info-icon {
        padding: 1rem;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.05);
        border-radius: 1rem;
        color: #818cf8;
        transition: all 0.3s ease;
    }
    .contact-info span { color: #cbd5e1; font-size: 1.125rem; font-weight: 500; transition: all 0.3s ease; }
    .contact-info:hover .contact-info-icon { background: rgba(79, 70, 229, 0.2); border-color: rgba(99, 102, 241, 0.3); }
    .contact-info:hover span { color: #fff; transform: translateX(4px); }
    .contact-form, .contact-success {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        padding: 2.5rem;
        border-radius: 3rem;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(12px);
    }
    .contact-success { text-align: center; align-items: center; border-color: rgba(34, 197, 94, 0.3); }
    .success-badge {
        width: 4rem;
        height: 4rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 9999px;
        background: rgba(34, 197, 94, 0.2);
        color: #4ade80;
        font-size: 2rem;
    }
    .contact-success p { color: #94a3b8; }
    .success-dismiss { background: none; border: none; color: #818cf8; font-weight: 700; cursor: pointer; }
    .success-dismiss:hover { text-decoration: underline; }
    .form-row { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 1.5rem; }
    .form-field { display: flex; flex-direction: column; gap: 0.5rem; }
    .form-field label { font-size: 0.75rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.1em; color: #94a3b8; }
    .form-field input, .form-field textarea {
        width: 100%;
        padding: 1rem 1.25rem;
        background: rgba(30, 41, 59, 0.5);
        border: 1px solid #334155;
        border-radius: 1rem;
        color: #fff;
        font: inherit;
        outline: none;
        resize: none;
    }
    .form-field input:focus, .form-field textarea:focus { border-color: transparent; box-shadow: 0 0 0 2px #6366f1; }
    .form-error { color: #fb7185; font-size: 0.875rem; font-weight: 500; }
    .form-submit {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        width: 100%;
        padding: 1.25rem;
        border: none;
        border-radius: 1rem;
        background: #4f46e5;
        color: #fff;
        font-size: 1.125rem;
        font-weight: 700;
        cursor: pointer;
    }
    .form-submit:hover { background: #6366f1; }
    .form-submit:disabled { background: #334155; color: #94a3b8; cursor: not-allowed; }
    .loading-spinner {
        display: inline-block;
        width: 20px;
        height: 20px;
        border: 3px solid rgba(255, 255, 255, 0.3);
        border-radius: 50%;
        border-top-color: #fff;
        animation: spin 1s ease-in-out infinite;
    }

    /* footer */
    .footer { padding: 3rem 0; background: #0f172a; border-top: 1px solid rgba(255, 255, 255, 0.05); }
    .footer-row { display: flex; align-items: center; justify-content: space-between; gap: 1.5rem; flex-wrap: wrap; }
    .footer-logo { font-size: 1.5rem; font-weight: 700; color: #818cf8; cursor: pointer; }
    .footer-logo:hover { color: #a5b4fc; }
    .footer p { color: #64748b; font-size: 0.875rem; }
    .footer-links { display: flex; gap: 1.5rem; }
    .footer-links a { color: #64748b; text-decoration: none; }
    .footer-links a:hover { color: #fff; }
"#;
