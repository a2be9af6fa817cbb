use folio_core::catalog::{kind_label, EDUCATION, SKILL_GROUPS};
use folio_core::{project_filter, CollectionFilter, FilterKey, NavSection, ProjectEntry, PROFILE};
use gloo::console;
use yew::prelude::*;

use crate::app_router;
use crate::reveal_dom::RevealVariant;
use crate::reveal_section::RevealSection;

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    eyebrow: AttrValue,
    lead: AttrValue,
    highlight: AttrValue,
    blurb: AttrValue,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <h2 class="eyebrow reveal" data-reveal="heading:eyebrow">{ props.eyebrow.clone() }</h2>
            <h3 class="reveal delay-100" data-reveal="heading:title">
                { props.lead.clone() }{" "}<span class="text-gradient">{ props.highlight.clone() }</span>
            </h3>
            <p class="reveal delay-200" data-reveal="heading:blurb">{ props.blurb.clone() }</p>
        </div>
    }
}

fn jump_to(section: NavSection) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        app_router::scroll_to_section(section);
    })
}

#[function_component(HeroSection)]
pub(crate) fn hero_section() -> Html {
    html! {
        <RevealSection id={NavSection::Home.anchor()} class={classes!("hero")}>
            <div class="hero-copy">
                <div class="badge reveal" data-reveal="hero:role">{ PROFILE.role }</div>
                <h1 class="reveal" data-reveal="hero:title">
                    {"Hi, I'm "}<span class="text-gradient">{ PROFILE.name }</span>
                </h1>
                <p class="reveal delay-200" data-reveal="hero:summary">{ PROFILE.summary }</p>
                <div class="hero-actions reveal delay-300" data-reveal="hero:actions">
                    <button class="button gradient" onclick={jump_to(NavSection::Contact)}>{"Contact Me"}</button>
                    <button class="button outline" onclick={jump_to(NavSection::Projects)}>{"View Projects"}</button>
                </div>
                <div class="hero-contact reveal delay-400" data-reveal="hero:contact">
                    <span>{ PROFILE.location }</span>
                    <span>{ PROFILE.phone }</span>
                    <span>{ PROFILE.email }</span>
                </div>
                <div class="hero-social reveal delay-500" data-reveal="hero:social">
                    <a href={PROFILE.github} target="_blank" rel="noopener noreferrer" aria-label="GitHub">{"GitHub"}</a>
                    <a href={PROFILE.linkedin} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"LinkedIn"}</a>
                </div>
            </div>
            <div class="hero-portrait">
                <img src={PROFILE.portrait} alt={PROFILE.name} />
            </div>
            <button class="scroll-down" aria-label="Scroll down" onclick={jump_to(NavSection::Skills)}>
                {"Scroll Down"}
            </button>
        </RevealSection>
    }
}

#[function_component(SkillsSection)]
pub(crate) fn skills_section() -> Html {
    let groups: Html = SKILL_GROUPS
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let items: Html = group
                .items
                .iter()
                .map(|skill| {
                    html! {
                        <div class="skill">
                            <div class="skill-label">
                                <span>{ skill.name }</span>
                                <span class="skill-level">{ format!("{}%", skill.level) }</span>
                            </div>
                            <div class="skill-bar">
                                <div class="skill-bar-fill" style={format!("--percent: {}%", skill.level)}></div>
                            </div>
                        </div>
                    }
                })
                .collect();
            html! {
                <div
                    key={group.category}
                    class="glass-card reveal card-hover"
                    data-reveal={format!("skill:{index}")}
                    style={format!("animation-delay: {}ms", index * 100)}
                >
                    <div class="skill-group-title">
                        <span class={classes!("icon", format!("icon-{}", group.icon))}></span>
                        <h4>{ group.category }</h4>
                    </div>
                    <div class="skill-list">{ items }</div>
                </div>
            }
        })
        .collect();
    html! {
        <RevealSection id={NavSection::Skills.anchor()} class={classes!("section")} variant={RevealVariant::SKILL_BARS}>
            <SectionHeading
                eyebrow="What I Do"
                lead="My"
                highlight="Skills"
                blurb="I've cultivated a diverse skill set over years of hands-on experience, allowing me to build complete, scalable web applications from concept to deployment."
            />
            <div class="grid">{ groups }</div>
        </RevealSection>
    }
}

#[function_component(EducationSection)]
pub(crate) fn education_section() -> Html {
    let items: Html = EDUCATION
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let side = if index % 2 == 0 { "timeline-left" } else { "timeline-right" };
            html! {
                <div
                    key={item.degree}
                    class={classes!("timeline-item", side, "reveal")}
                    data-reveal={format!("education:{index}")}
                    style={format!("animation-delay: {}ms", index * 150)}
                >
                    <div class="timeline-dot"></div>
                    <div class="glass-card card-hover">
                        <h4>{ item.degree }</h4>
                        <p class="institution">{ item.institution }</p>
                        <div class="meta">
                            <span>{ item.location }</span>
                            <span>{ item.period }</span>
                        </div>
                        <p>{ item.description }</p>
                    </div>
                </div>
            }
        })
        .collect();
    html! {
        <RevealSection id={NavSection::Education.anchor()} class={classes!("section")}>
            <SectionHeading
                eyebrow="My Education"
                lead="Academic"
                highlight="Journey"
                blurb="My educational background has provided me with a strong foundation in computer science and continuous learning."
            />
            <div class="timeline">{ items }</div>
        </RevealSection>
    }
}

fn filter_label(key: &FilterKey) -> String {
    match key {
        FilterKey::All => "All Projects".to_string(),
        FilterKey::Tag(tag) => kind_label(tag).unwrap_or(tag.as_str()).to_string(),
    }
}

fn project_card(index: usize, project: &ProjectEntry) -> Html {
    let stack: Html = project
        .stack
        .iter()
        .map(|tech| html! { <span class="tag">{ *tech }</span> })
        .collect();
    html! {
        <div
            key={project.slug}
            class="reveal card-hover glass-card project-card"
            data-reveal={format!("project:{}", project.slug)}
            style={format!("animation-delay: {}ms", index * 100)}
        >
            <div class="project-image">
                <img src={project.image} alt={project.title} loading="lazy" />
                <div class="project-overlay">
                    <a href={project.live_url} target="_blank" rel="noopener noreferrer" aria-label="View live site">{"Live"}</a>
                    <a href={project.repo_url} target="_blank" rel="noopener noreferrer" aria-label="View code">{"Code"}</a>
                </div>
            </div>
            <div class="project-body">
                <h4>{ project.title }</h4>
                <p>{ project.description }</p>
                <div class="tags">{ stack }</div>
                <a href={project.live_url} target="_blank" rel="noopener noreferrer">{"View Project"}</a>
            </div>
        </div>
    }
}

/// Gallery: the filter decides which cards exist, the section re-scans its
/// reveal handles every time the active key changes.
#[function_component(ProjectsSection)]
pub(crate) fn projects_section() -> Html {
    let filter = use_mut_ref(|| {
        project_filter().unwrap_or_else(|err| {
            console::warn!("projects: catalog rejected", err.to_string());
            CollectionFilter::new(Vec::new())
        })
    });
    let active = use_state(FilterKey::default);

    let on_select = {
        let filter = filter.clone();
        let active = active.clone();
        Callback::from(move |key: FilterKey| {
            let result = filter.borrow_mut().set_filter(key.clone());
            match result {
                Ok(()) => active.set(key),
                Err(err) => {
                    console::warn!("projects: filter rejected", err.to_string());
                }
            }
        })
    };

    let filter_ref = filter.borrow();
    let buttons: Html = filter_ref
        .keys()
        .map(|key| {
            let selected = key == *active;
            let label = filter_label(&key);
            let onclick = {
                let on_select = on_select.clone();
                let key = key.clone();
                Callback::from(move |_: MouseEvent| on_select.emit(key.clone()))
            };
            html! {
                <button key={key.to_string()} class={classes!("filter-button", selected.then_some("selected"))} {onclick}>
                    { label }
                </button>
            }
        })
        .collect();
    let cards: Html = filter_ref
        .current_view()
        .enumerate()
        .map(|(index, record)| project_card(index, record.payload()))
        .collect();

    html! {
        <RevealSection id={NavSection::Projects.anchor()} class={classes!("section")} revision={AttrValue::from(active.to_string())}>
            <SectionHeading
                eyebrow="My Work"
                lead="Recent"
                highlight="Projects"
                blurb="Explore my latest projects showcasing my technical skills and problem-solving abilities."
            />
            <div class="filters reveal delay-300" data-reveal="projects:filters">{ buttons }</div>
            <div class="grid">{ cards }</div>
        </RevealSection>
    }
}

#[function_component(ContactSection)]
pub(crate) fn contact_section() -> Html {
    html! {
        <RevealSection id={NavSection::Contact.anchor()} class={classes!("section", "contact")}>
            <h3 class="reveal" data-reveal="contact:title">{"Get in touch"}</h3>
            <div class="contact-lines reveal delay-100" data-reveal="contact:lines">
                <a href={format!("mailto:{}", PROFILE.email)}>{ PROFILE.email }</a>
                <a href={format!("tel:{}", PROFILE.phone)}>{ PROFILE.phone }</a>
                <span>{ PROFILE.location }</span>
            </div>
            <div class="contact-links reveal delay-200" data-reveal="contact:links">
                <a href={PROFILE.github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                <a href={PROFILE.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                <a href={PROFILE.resume_url} target="_blank" rel="noopener noreferrer">{"Resume"}</a>
            </div>
        </RevealSection>
    }
}
