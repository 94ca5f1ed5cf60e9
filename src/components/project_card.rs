use yew::prelude::*;

use crate::components::motion_link::MotionLink;
use crate::content::ProjectDescriptor;

const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Keys that activate an element carrying `role="button"`.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// A held key auto-repeats; only the first press counts.
pub fn is_activation(key: &str, repeat: bool) -> bool {
    is_activation_key(key) && !repeat
}

/// Opens `url` in a new browsing context without giving it a handle back to this page.
pub fn open_in_new_context(url: &str) {
    let Some(window) = web_sys::window() else {
        web_sys::console::warn_1(&"No window available to open link".into());
        return;
    };
    match window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        Ok(_) => web_sys::console::log_1(&format!("Opened {}", url).into()),
        Err(e) => web_sys::console::warn_2(&format!("Could not open {}", url).into(), &e),
    }
}

fn default_opener() -> Callback<String> {
    Callback::from(|url: String| open_in_new_context(&url))
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: ProjectDescriptor,
    /// Receives the project link when the card itself is activated.
    #[prop_or_else(default_opener)]
    pub on_open: Callback<String>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    let onclick = {
        let url = project.video_url.clone();
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(url.clone()))
    };

    let onkeydown = {
        let url = project.video_url.clone();
        let on_open = props.on_open.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation(&e.key(), e.repeat()) {
                // Space would otherwise scroll the page.
                e.prevent_default();
                on_open.emit(url.clone());
            }
        })
    };

    html! {
        <div class="project-card" role="button" tabindex="0" {onclick} {onkeydown}>
            <div class="project-embed">
                <iframe
                    src={project.video_url.clone()}
                    title={project.title.clone()}
                    loading="lazy"
                    allow={EMBED_ALLOW}
                    allowfullscreen=true
                ></iframe>
            </div>
            <div class="project-body">
                <h3 class="project-title">{ &project.title }</h3>
                <p class="project-description">{ &project.description }</p>
                <MotionLink
                    href={project.video_url.clone()}
                    class="btn btn-blue"
                    aria_label={format!("Open {}", project.title)}
                    new_tab=true
                    stop_propagation=true
                >
                    {"Open"}
                </MotionLink>
            </div>
        </div>
    }
}
