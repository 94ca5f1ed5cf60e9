use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::project_card::ProjectCard;
use crate::content::ProjectDescriptor;

#[derive(Properties, PartialEq)]
pub struct ProjectGridProps {
    pub projects: Vec<ProjectDescriptor>,
}

/// One card per descriptor, in declaration order.
#[function_component(ProjectGrid)]
pub fn project_grid(props: &ProjectGridProps) -> Html {
    html! {
        <FadeIn id="portfolio" class="section">
            <div class="container">
                <h2 class="section-title">{"Featured Projects"}</h2>
                <div class="project-grid">
                    {
                        props.projects.iter().enumerate().map(|(index, project)| {
                            html! { <ProjectCard key={index} project={project.clone()} /> }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </FadeIn>
    }
}
