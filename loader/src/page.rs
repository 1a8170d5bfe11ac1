use crate::{FetchError, Loader, StaticProps};
use std::fmt::Write;
use tracing::warn;
use xml::escape::{escape_str_attribute, escape_str_pcdata};

/// An episode page for one route.
#[derive(Debug)]
pub struct EpisodePage {
    pub slug: String,
    pub props: Result<StaticProps, FetchError>,
}

impl EpisodePage {
    pub async fn generate(loader: &Loader, slug: &str) -> EpisodePage {
        let props = loader.static_props(slug).await;
        if let Err(err) = &props {
            warn!(slug, %err, "could not generate episode page");
        }

        EpisodePage {
            slug: slug.to_owned(),
            props,
        }
    }

    pub fn render(&self) -> String {
        let mut html = String::new();
        html.push_str("<article class=\"episode\">\n");
        let _ = writeln!(html, "<h1>{}</h1>", escape_str_pcdata(&self.slug));

        match &self.props {
            Ok(StaticProps { episode, .. }) => {
                let _ = writeln!(
                    html,
                    "<img src=\"{}\" alt=\"{}\">",
                    escape_str_attribute(&episode.thumbnail),
                    escape_str_attribute(&episode.title)
                );
                let _ = writeln!(html, "<h2>{}</h2>", escape_str_pcdata(&episode.title));
                let _ = writeln!(
                    html,
                    "<p class=\"meta\"><span>{}</span> <span>{}</span> <span>{}</span></p>",
                    escape_str_pcdata(&episode.members),
                    escape_str_pcdata(&episode.published_at),
                    escape_str_pcdata(&episode.duration_as_string)
                );
                let _ = writeln!(
                    html,
                    "<audio src=\"{}\" controls></audio>",
                    escape_str_attribute(&episode.url)
                );
                let _ = writeln!(
                    html,
                    "<div class=\"description\">{}</div>",
                    escape_str_pcdata(&episode.description)
                );
            }
            Err(FetchError::NotFound(_)) => {
                html.push_str("<p class=\"not-found\">Episode not found</p>\n");
            }
            Err(err) => {
                let _ = writeln!(
                    html,
                    "<p class=\"error\">Episode unavailable: {}</p>",
                    escape_str_pcdata(&err.to_string())
                );
            }
        }

        html.push_str("</article>\n");
        html
    }
}
