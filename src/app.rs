use yew::prelude::*;

use crate::content;
use crate::pages;

#[function_component(App)]
pub fn app() -> Html {
    let site = content::site();

    use_effect_with((), move |_| {
        match site {
            Ok(site) => web_sys::console::log_1(
                &format!("Loaded site content with {} projects", site.projects.len()).into(),
            ),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load site content: {}", e).into())
            }
        }
        || ()
    });

    html! {
        <main>
            {
                match site {
                    Ok(site) => html! { <pages::home::HomePage {site} /> },
                    Err(e) => html! {
                        <div class="container">
                            <div class="alert alert-error">{ e.to_string() }</div>
                        </div>
                    },
                }
            }
        </main>
    }
}
