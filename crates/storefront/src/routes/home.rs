//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use bidua_core::catalog::{
    BENEFITS, FAQS, Faq, Highlight, KEY_INGREDIENTS, PRODUCT_ALT_TEXT, PRODUCT_IMAGES, Product,
    TESTIMONIALS, Testimonial, UNIQUE_FEATURES, USAGE_GUIDES, UsageGuide, WHO_CAN_USE,
    featured_product,
};
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::routes::layout::Layout;

/// Average rating and review count shown in the hero.
const RATING: &str = "4.9/5";
const REVIEW_COUNT: u32 = 2847;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub product: Product,
    pub images: &'static [&'static str],
    pub image_alt: &'static str,
    pub rating: &'static str,
    pub review_count: u32,
    pub benefits: &'static [Highlight],
    pub ingredients: &'static [Highlight],
    pub features: &'static [Highlight],
    pub usage: &'static [UsageGuide],
    pub audiences: &'static [&'static str],
    pub faqs: &'static [Faq],
    pub testimonials: &'static [Testimonial],
}

/// Display the landing page.
#[instrument(skip(session))]
pub async fn home(session: Session) -> impl IntoResponse {
    HomeTemplate {
        layout: Layout::load(&session).await,
        product: featured_product(),
        images: &PRODUCT_IMAGES,
        image_alt: PRODUCT_ALT_TEXT,
        rating: RATING,
        review_count: REVIEW_COUNT,
        benefits: &BENEFITS,
        ingredients: &KEY_INGREDIENTS,
        features: &UNIQUE_FEATURES,
        usage: &USAGE_GUIDES,
        audiences: &WHO_CAN_USE,
        faqs: &FAQS,
        testimonials: &TESTIMONIALS,
    }
}
