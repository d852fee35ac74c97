use askama::Template;

use super::PageContext;

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub ctx: PageContext,
}
