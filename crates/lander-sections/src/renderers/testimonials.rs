//! Testimonials section.

use std::fmt::Write;

use lander_content::Entry;

use crate::html::{escape_html, push_heading, push_image};

const STAR_PATH: &str = "M10.788 3.21c.448-1.077 1.976-1.077 2.424 0l2.082 5.006 5.404.434c1.164.093 \
    1.636 1.545.749 2.305l-4.117 3.527 1.257 5.273c.271 1.136-.964 2.033-1.96 1.425L12 18.354 \
    7.373 21.18c-.996.608-2.231-.29-1.96-1.425l1.257-5.273-4.117-3.527c-.887-.76-.415-2.212.749-2.305\
    l5.404-.434 2.082-5.005Z";

/// Stars on the rating scale.
const RATING_SCALE: i64 = 5;

fn layout_class(layout: &str) -> &'static str {
    match layout {
        "list" => "space-y-6 max-w-3xl mx-auto",
        "carousel" => "flex overflow-x-auto gap-6 pb-6 snap-x snap-mandatory",
        _ => "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
    }
}

/// Five stars, the first `rating` filled. No rating renders nothing.
fn push_rating(html: &mut String, rating: Option<i64>) {
    let Some(rating) = rating.filter(|r| *r > 0) else {
        return;
    };
    html.push_str("<div class=\"flex gap-1 mb-2\">");
    for i in 0..RATING_SCALE {
        let color = if i < rating {
            "text-yellow-400"
        } else {
            "text-gray-300"
        };
        let _ = write!(
            html,
            "<svg class=\"w-5 h-5 {color}\" viewBox=\"0 0 24 24\" fill=\"currentColor\" \
             aria-hidden=\"true\"><path d=\"{STAR_PATH}\"></path></svg>"
        );
    }
    html.push_str("</div>\n");
}

fn push_testimonial(html: &mut String, testimonial: &Entry) {
    html.push_str("<div class=\"bg-white rounded-lg shadow-lg p-6 h-full flex flex-col\">\n");
    push_rating(html, testimonial.integer("rating"));
    let _ = writeln!(
        html,
        "<blockquote class=\"flex-1\"><p class=\"text-gray-600 italic mb-4\">&quot;{}&quot;</p></blockquote>",
        escape_html(testimonial.text("quote").unwrap_or_default())
    );

    let author = testimonial.text("authorName").unwrap_or_default();
    html.push_str("<div class=\"flex items-center gap-4 mt-4\">\n");
    if let Some(image) = testimonial.asset("authorImage") {
        push_image(html, &image, "w-12 h-12 rounded-full object-cover", Some(author));
    }
    html.push_str("<div>\n");
    let _ = writeln!(html, "<p class=\"font-semibold text-gray-900\">{}</p>", escape_html(author));
    if let Some(title) = testimonial.text("authorTitle") {
        let _ = writeln!(html, "<p class=\"text-sm text-gray-600\">{}</p>", escape_html(title));
    }
    if let Some(company) = testimonial.text("company") {
        let _ = writeln!(html, "<p class=\"text-sm text-gray-500\">{}</p>", escape_html(company));
    }
    html.push_str("</div>\n</div>\n</div>\n");
}

pub(crate) fn render(entry: &Entry) -> String {
    let layout = entry.text("layout").unwrap_or("grid");
    let carousel = layout == "carousel";

    let mut html = String::with_capacity(2048);
    html.push_str("<div>\n");
    push_heading(&mut html, entry);
    let _ = writeln!(html, "<div class=\"{}\">", layout_class(layout));
    for testimonial in entry.entries("testimonials") {
        if carousel {
            html.push_str("<div class=\"snap-start flex-none w-full md:w-1/2 lg:w-1/3\">\n");
        } else {
            html.push_str("<div>\n");
        }
        push_testimonial(&mut html, &testimonial);
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::entry;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn testimonial(rating: Option<i64>) -> serde_json::Value {
        let mut fields = json!({"quote": "Great", "authorName": "Ana", "company": "Acme"});
        if let Some(rating) = rating {
            fields["rating"] = json!(rating);
        }
        json!({"sys": {"id": "t", "type": "Entry"}, "fields": fields})
    }

    #[test]
    fn test_rating_fills_stars() {
        let mut html = String::new();
        push_rating(&mut html, Some(3));
        assert_eq!(html.matches("text-yellow-400").count(), 3);
        assert_eq!(html.matches("text-gray-300").count(), 2);
    }

    #[test]
    fn test_rating_above_scale_fills_all() {
        let mut html = String::new();
        push_rating(&mut html, Some(9));
        assert_eq!(html.matches("text-yellow-400").count(), 5);
        assert_eq!(html.matches("<svg").count(), 5);
    }

    #[test]
    fn test_absent_rating_renders_nothing() {
        let mut html = String::new();
        push_rating(&mut html, None);
        push_rating(&mut html, Some(0));
        assert_eq!(html, "");
    }

    #[test]
    fn test_layouts() {
        assert_eq!(layout_class("grid"), "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6");
        assert_eq!(layout_class("list"), "space-y-6 max-w-3xl mx-auto");
        assert_eq!(layout_class("carousel"), "flex overflow-x-auto gap-6 pb-6 snap-x snap-mandatory");
        assert_eq!(layout_class("masonry"), layout_class("grid"));
    }

    #[test]
    fn test_default_layout_is_grid() {
        let html = render(&entry(json!({"testimonials": [testimonial(Some(5))]})));
        assert!(html.contains("class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6\""));
        assert!(!html.contains("snap-start"));
    }

    #[test]
    fn test_carousel_items() {
        let html = render(&entry(json!({"layout": "carousel", "testimonials": [testimonial(None), testimonial(None)]})));
        assert_eq!(html.matches("snap-start flex-none").count(), 2);
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_testimonial_content() {
        let html = render(&entry(json!({"title": "Loved by teams", "testimonials": [testimonial(Some(4))]})));
        assert!(html.contains(">Loved by teams</h2>"));
        assert!(html.contains("&quot;Great&quot;"));
        assert!(html.contains(">Ana</p>"));
        assert!(html.contains(">Acme</p>"));
        assert!(!html.contains("text-sm text-gray-600"));
    }
}
