use yew::prelude::*;

use crate::components::{About, Contact, Footer, Header, Hero, ProjectGrid};
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub site: &'static SiteContent,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let site = props.site;

    html! {
        <div class="page">
            <Header {site} />
            <Hero {site} />
            <ProjectGrid projects={site.projects.clone()} />
            <About paragraphs={site.about.clone()} />
            <Contact {site} />
            <Footer owner={site.owner.clone()} year={site.copyright_year} />
        </div>
    }
}
