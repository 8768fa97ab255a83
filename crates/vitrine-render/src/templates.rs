//! Template engine for rendering content fragments and pages.

use minijinja::{context, Environment};
use vitrine_content::ContentSnapshot;

use crate::view::{founder_view, project_cards, service_cards, PageRole, RenderOptions};

/// Context for rendering a full static page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Site title
    pub site_title: String,
    /// Footer year
    pub year: i32,
    /// Rendered services fragment
    pub services_html: String,
    /// Rendered founder fragment
    pub founder_html: String,
    /// Rendered projects fragment
    pub projects_html: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("services.html".to_string(), SERVICES_TEMPLATE.to_string())
            .expect("Failed to add services template");

        env.add_template_owned("founder.html".to_string(), FOUNDER_TEMPLATE.to_string())
            .expect("Failed to add founder template");

        env.add_template_owned("projects.html".to_string(), PROJECTS_TEMPLATE.to_string())
            .expect("Failed to add projects template");

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");

        Self { env }
    }

    /// Render the fragment for one page role from the current snapshot.
    ///
    /// Pure over its inputs: rendering the same snapshot twice produces the
    /// same output, so a fragment can safely be re-rendered after a
    /// late-arriving override.
    pub fn render_fragment(
        &self,
        role: PageRole,
        snapshot: &ContentSnapshot,
        options: &RenderOptions,
    ) -> Result<String, minijinja::Error> {
        match role {
            PageRole::Services => {
                let tmpl = self.env.get_template("services.html")?;
                tmpl.render(context! { cards => service_cards(snapshot.services()) })
            }
            PageRole::Founder => {
                let tmpl = self.env.get_template("founder.html")?;
                tmpl.render(context! { founder => founder_view(snapshot.founder()) })
            }
            PageRole::Projects => {
                let tmpl = self.env.get_template("projects.html")?;
                tmpl.render(context! {
                    cards => project_cards(snapshot.projects(), options.project_limit),
                })
            }
        }
    }

    /// Render a full index page from pre-rendered fragments.
    pub fn render_page(&self, page: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            site_title => &page.site_title,
            year => page.year,
            services_html => &page.services_html,
            founder_html => &page.founder_html,
            projects_html => &page.projects_html,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const SERVICES_TEMPLATE: &str = r##"{% for card in cards %}<article class="card">
  <div class="card-icon">{{ card.icon }}</div>
  <h3>{{ card.title }}</h3>
  <p>{{ card.description }}</p>
</article>
{% endfor %}"##;

const FOUNDER_TEMPLATE: &str = r##"<div class="founder-container">
  <div class="founder-image">
    <img src="{{ founder.image }}" alt="{{ founder.name }}">
  </div>
  <div class="founder-info">
    <h3>{{ founder.name }}</h3>
    <p class="founder-family"><strong>Father:</strong> {{ founder.father_name }}</p>
    <p class="founder-title">{{ founder.title }}</p>
    <p class="founder-bio">{{ founder.bio }}</p>
    <div class="expertise">
      <h4>Expertise:</h4>
      <div class="badges">{% for exp in founder.expertise %}<span class="badge">{{ exp }}</span>{% endfor %}</div>
    </div>
    <div class="founder-contact">
      <p><strong>Email:</strong> <a href="mailto:{{ founder.contact }}">{{ founder.contact }}</a></p>
      {% for link in founder.social %}<a class="social-link" href="{{ link.url }}">{{ link.platform }}</a>
      {% endfor %}
    </div>
  </div>
</div>"##;

const PROJECTS_TEMPLATE: &str = r##"{% for card in cards %}<div class="proj">
  <img src="{{ card.image }}" alt="{{ card.title }}" loading="lazy">
  <div class="proj-content">
    <span class="proj-category">{{ card.category }}</span>
    <h4>{{ card.title }}</h4>
    <p>{{ card.description }}</p>
  </div>
</div>
{% endfor %}"##;

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ site_title }}</title>
  <link rel="stylesheet" href="assets/main.css">
</head>
<body>
  <header>
    <h1>{{ site_title }}</h1>
  </header>
  <main>
    <section id="services">
      <h2>Services</h2>
      <div class="cards">{{ services_html | safe }}</div>
    </section>
    <section id="founder">
      <h2>About the Founder</h2>
      <div class="founder-section">{{ founder_html | safe }}</div>
    </section>
    <section id="projects">
      <h2>Projects</h2>
      <div class="projects-grid">{{ projects_html | safe }}</div>
    </section>
  </main>
  <footer>
    <p>&copy; {{ year }} {{ site_title }}</p>
  </footer>
</body>
</html>"##;
