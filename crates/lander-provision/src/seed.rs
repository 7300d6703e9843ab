//! Example landing page content.
//!
//! Creates a complete landing page graph in English and Spanish: buttons,
//! CTA blocks, one entry per section kind with their items, the six
//! `section` wrappers and the landing page itself.

use serde_json::{Map, Value, json};
use tracing::{info, warn};

use crate::api::ManagementApi;
use crate::error::ProvisionError;
use crate::report::{Outcome, Report};
use crate::retry::RetryPolicy;
use crate::types::{EntryFilter, ManagedEntry, SOURCE_LOCALE};

/// Locale of the translated values.
pub const TRANSLATION_LOCALE: &str = "es";

/// Seeding options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedOptions {
    /// Slug of the landing page to create.
    pub slug: String,
    /// Create the page even if one with the slug exists.
    pub force: bool,
    /// Publish every created entry.
    pub publish: bool,
}

/// Result of a seeding run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// A landing page with the slug already exists; nothing was created.
    Skipped {
        /// ID of the existing landing page.
        existing_id: String,
    },
    /// The graph was created.
    Created {
        /// ID of the new landing page.
        landing_page_id: String,
        /// One item per created entry, in creation order.
        report: Report,
    },
}

/// Create the example landing page.
///
/// Creation stops at the first failed entry; entries created before it are
/// left in place. Publish failures are recorded per entry.
pub fn seed(
    api: &dyn ManagementApi,
    options: &SeedOptions,
    retry: RetryPolicy,
) -> Result<SeedOutcome, ProvisionError> {
    if !options.force {
        let existing = api.entries(
            &EntryFilter::default()
                .content_type("landingPage")
                .field_eq("slug", options.slug.as_str())
                .limit(1),
        )?;
        if let Some(page) = existing.first() {
            info!(slug = %options.slug, id = page.id(), "Landing page exists, skipping seed");
            return Ok(SeedOutcome::Skipped {
                existing_id: page.id().to_owned(),
            });
        }
    }

    let mut seeder = Seeder {
        api,
        created: Vec::new(),
    };
    let landing_page_id = seeder.landing_page(&options.slug)?;

    let mut report = Report::default();
    for entry in &seeder.created {
        let outcome = if options.publish {
            publish(api, entry, retry)
        } else {
            Outcome::Created
        };
        report.push(entry.content_type_id(), entry.id(), entry.label(), outcome);
    }

    Ok(SeedOutcome::Created {
        landing_page_id,
        report,
    })
}

fn publish(api: &dyn ManagementApi, entry: &ManagedEntry, retry: RetryPolicy) -> Outcome {
    let id = entry.id();
    let mut version = entry.version();
    let result = retry.run(id, |attempt| {
        if attempt > 1 {
            version = api.entry(id)?.version();
        }
        api.publish_entry(id, version)
    });
    match result {
        Ok(_) => Outcome::Published,
        Err(err) => {
            warn!(id, error = %err, "Failed to publish seeded entry");
            Outcome::Failed(err.to_string())
        }
    }
}

fn entry_link(id: &str) -> Value {
    json!({ "sys": { "type": "Link", "linkType": "Entry", "id": id } })
}

/// Field values keyed by locale.
#[derive(Default)]
struct Fields(Map<String, Value>);

impl Fields {
    /// Value in both locales.
    fn translated(mut self, field: &str, en: &str, es: &str) -> Self {
        self.0.insert(
            field.to_owned(),
            json!({ SOURCE_LOCALE: en, TRANSLATION_LOCALE: es }),
        );
        self
    }

    /// Value in the source locale only.
    fn value(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0
            .insert(field.to_owned(), json!({ SOURCE_LOCALE: value.into() }));
        self
    }

    fn link(self, field: &str, id: &str) -> Self {
        self.value(field, entry_link(id))
    }

    fn links(self, field: &str, ids: &[String]) -> Self {
        let links: Vec<Value> = ids.iter().map(|id| entry_link(id)).collect();
        self.value(field, links)
    }
}

struct Seeder<'a> {
    api: &'a dyn ManagementApi,
    created: Vec<ManagedEntry>,
}

impl Seeder<'_> {
    fn create(&mut self, content_type: &str, fields: Fields) -> Result<String, ProvisionError> {
        let entry = self.api.create_entry(content_type, &fields.0)?;
        let id = entry.id().to_owned();
        self.created.push(entry);
        Ok(id)
    }

    fn button(
        &mut self,
        text: (&str, &str),
        link: (&str, &str),
        variant: &str,
        size: &str,
    ) -> Result<String, ProvisionError> {
        self.create(
            "button",
            Fields::default()
                .translated("text", text.0, text.1)
                .translated("link", link.0, link.1)
                .value("variant", variant)
                .value("size", size),
        )
    }

    fn navigation_link(
        &mut self,
        text: (&str, &str),
        url: (&str, &str),
    ) -> Result<String, ProvisionError> {
        self.create(
            "navigationLink",
            Fields::default()
                .translated("text", text.0, text.1)
                .translated("url", url.0, url.1),
        )
    }

    fn section(
        &mut self,
        kind: &str,
        content: &str,
        background: &str,
    ) -> Result<String, ProvisionError> {
        self.create(
            "section",
            Fields::default()
                .value("type", kind)
                .link("content", content)
                .value("padding", "large")
                .value("backgroundColor", background),
        )
    }

    fn landing_page(&mut self, slug: &str) -> Result<String, ProvisionError> {
        let primary = self.button(
            ("Get Started", "Comenzar"),
            ("/signup", "/registro"),
            "primary",
            "large",
        )?;
        let secondary = self.button(
            ("Learn More", "Saber Más"),
            ("/about", "/acerca"),
            "secondary",
            "medium",
        )?;
        let outline = self.button(
            ("Contact Us", "Contáctanos"),
            ("/contact", "/contacto"),
            "outline",
            "medium",
        )?;

        let main_block = self.create(
            "ctaBlock",
            Fields::default()
                .translated(
                    "title",
                    "Ready to Transform Your Experience?",
                    "¿Listo para Transformar tu Experiencia?",
                )
                .translated(
                    "subtitle",
                    "Join thousands of satisfied customers who have already made the switch.",
                    "Únete a miles de clientes satisfechos que ya han dado el cambio.",
                )
                .value("alignment", "center")
                .link("primaryButton", &primary)
                .link("secondaryButton", &secondary),
        )?;
        self.create(
            "ctaBlock",
            Fields::default()
                .translated("title", "Need More Information?", "¿Necesitas Más Información?")
                .translated(
                    "subtitle",
                    "Our team is here to help you make the right decision.",
                    "Nuestro equipo está aquí para ayudarte a tomar la decisión correcta.",
                )
                .value("alignment", "left")
                .link("primaryButton", &outline),
        )?;

        let hero = self.create(
            "heroSection",
            Fields::default()
                .translated(
                    "title",
                    "Welcome to the Future of Business",
                    "Bienvenido al Futuro de los Negocios",
                )
                .translated(
                    "subtitle",
                    "Transform your operations with our innovative platform",
                    "Transforma tus operaciones con nuestra plataforma innovadora",
                )
                .value("alignment", "center")
                .value("backgroundColor", "#ffffff")
                .link("ctaButton", &primary),
        )?;

        let features = self.features()?;
        let testimonials = self.testimonials()?;
        let specs = self.product_specs()?;

        let cta = self.create(
            "ctaSection",
            Fields::default()
                .translated("title", "Start Your Journey Today", "Comienza tu Viaje Hoy")
                .translated(
                    "subtitle",
                    "Join the growing community of successful businesses using our platform.",
                    "Únete a la creciente comunidad de negocios exitosos que usan nuestra plataforma.",
                )
                .link("ctaBlock", &main_block)
                .value("backgroundColor", "#f8f9fa"),
        )?;

        let footer = self.footer()?;

        let sections = vec![
            self.section("hero", &hero, "#ffffff")?,
            self.section("features", &features, "#f8f9fa")?,
            self.section("testimonials", &testimonials, "#ffffff")?,
            self.section("productSpecs", &specs, "#f8f9fa")?,
            self.section("cta", &cta, "#ffffff")?,
            self.section("footer", &footer, "#f8f9fa")?,
        ];

        self.create(
            "landingPage",
            Fields::default()
                .translated(
                    "title",
                    "Welcome to Our Platform",
                    "Bienvenido a Nuestra Plataforma",
                )
                .value("slug", slug)
                .translated(
                    "metaDescription",
                    "Transform your business with our innovative platform. Join thousands of satisfied customers today.",
                    "Transforma tu negocio con nuestra plataforma innovadora. Únete a miles de clientes satisfechos hoy.",
                )
                .links("sections", &sections)
                .value("status", "published"),
        )
    }

    fn features(&mut self) -> Result<String, ProvisionError> {
        let items = [
            (
                ("Easy Integration", "Fácil Integración"),
                (
                    "Seamlessly connect with your existing tools and workflows",
                    "Conéctate perfectamente con tus herramientas y flujos de trabajo existentes",
                ),
                ("/features/integration", "/caracteristicas/integracion"),
            ),
            (
                ("Advanced Analytics", "Análisis Avanzado"),
                (
                    "Get deep insights into your business performance",
                    "Obtén información profunda sobre el rendimiento de tu negocio",
                ),
                ("/features/analytics", "/caracteristicas/analisis"),
            ),
            (
                ("24/7 Support", "Soporte 24/7"),
                (
                    "Our dedicated team is always here to help you",
                    "Nuestro equipo dedicado siempre está aquí para ayudarte",
                ),
                ("/features/support", "/caracteristicas/soporte"),
            ),
        ];

        let mut ids = Vec::new();
        for (title, description, link) in items {
            ids.push(self.create(
                "featureItem",
                Fields::default()
                    .translated("title", title.0, title.1)
                    .translated("description", description.0, description.1)
                    .translated("link", link.0, link.1),
            )?);
        }

        self.create(
            "featuresSection",
            Fields::default()
                .translated("title", "Why Choose Us", "Por Qué Elegirnos")
                .translated(
                    "subtitle",
                    "Discover the features that set us apart",
                    "Descubre las características que nos distinguen",
                )
                .value("layout", "grid")
                .value("columns", 3)
                .value("backgroundColor", "#f8f9fa")
                .links("features", &ids),
        )
    }

    fn testimonials(&mut self) -> Result<String, ProvisionError> {
        let quotes = [
            (
                (
                    "This platform has transformed how we do business. The results are incredible!",
                    "Esta plataforma ha transformado nuestra forma de hacer negocios. ¡Los resultados son increíbles!",
                ),
                "Sarah Johnson",
                "CEO, TechCorp",
                "TechCorp",
            ),
            (
                (
                    "The support team is amazing. They helped us every step of the way.",
                    "El equipo de soporte es increíble. Nos ayudaron en cada paso del camino.",
                ),
                "Michael Chen",
                "CTO, Innovate Inc",
                "Innovate Inc",
            ),
        ];

        let mut ids = Vec::new();
        for (quote, author, title, company) in quotes {
            ids.push(self.create(
                "testimonial",
                Fields::default()
                    .translated("quote", quote.0, quote.1)
                    .translated("authorName", author, author)
                    .translated("authorTitle", title, title)
                    .translated("company", company, company)
                    .value("rating", 5),
            )?);
        }

        self.create(
            "testimonialsSection",
            Fields::default()
                .translated("title", "What Our Customers Say", "Lo Que Dicen Nuestros Clientes")
                .translated(
                    "subtitle",
                    "Join thousands of satisfied businesses",
                    "Únete a miles de negocios satisfechos",
                )
                .value("layout", "carousel")
                .value("backgroundColor", "#ffffff")
                .links("testimonials", &ids),
        )
    }

    fn product_specs(&mut self) -> Result<String, ProvisionError> {
        let specs = [
            (
                ("Performance", "Rendimiento"),
                ("99.9%", "99.9%"),
                ("Uptime guarantee", "Garantía de tiempo de actividad"),
            ),
            (
                ("Security", "Seguridad"),
                ("Enterprise", "Empresarial"),
                ("Bank-level encryption", "Cifrado de nivel bancario"),
            ),
            (
                ("Support", "Soporte"),
                ("24/7", "24/7"),
                ("Round-the-clock assistance", "Asistencia las 24 horas"),
            ),
        ];

        let mut ids = Vec::new();
        for (name, value, description) in specs {
            ids.push(self.create(
                "productSpec",
                Fields::default()
                    .translated("name", name.0, name.1)
                    .translated("value", value.0, value.1)
                    .translated("description", description.0, description.1),
            )?);
        }

        self.create(
            "productSpecsSection",
            Fields::default()
                .translated("title", "Product Specifications", "Especificaciones del Producto")
                .translated(
                    "subtitle",
                    "Technical details that matter",
                    "Detalles técnicos que importan",
                )
                .value("layout", "grid")
                .value("backgroundColor", "#f8f9fa")
                .links("specs", &ids),
        )
    }

    fn footer(&mut self) -> Result<String, ProvisionError> {
        let product_links = vec![
            self.navigation_link(("Features", "Características"), ("/features", "/caracteristicas"))?,
            self.navigation_link(("Pricing", "Precios"), ("/pricing", "/precios"))?,
        ];
        let company_links = vec![
            self.navigation_link(("About", "Acerca de"), ("/about", "/acerca"))?,
            self.navigation_link(("Contact", "Contacto"), ("/contact", "/contacto"))?,
        ];
        let columns = vec![
            self.create(
                "footerColumn",
                Fields::default()
                    .translated("heading", "Product", "Producto")
                    .links("links", &product_links),
            )?,
            self.create(
                "footerColumn",
                Fields::default()
                    .translated("heading", "Company", "Empresa")
                    .links("links", &company_links),
            )?,
        ];

        let mut social = Vec::new();
        for (platform, url) in [
            ("twitter", "https://twitter.com/econova"),
            ("linkedin", "https://www.linkedin.com/company/econova"),
        ] {
            social.push(self.create(
                "socialLink",
                Fields::default()
                    .value("platform", platform)
                    .translated("url", url, url),
            )?);
        }

        let bottom_links = vec![
            self.navigation_link(("Privacy Policy", "Política de Privacidad"), ("/privacy", "/privacidad"))?,
            self.navigation_link(("Terms of Service", "Términos de Servicio"), ("/terms", "/terminos"))?,
        ];

        self.create(
            "footerSection",
            Fields::default()
                .translated("title", "Footer", "Pie de Página")
                .translated(
                    "tagline",
                    "Building a sustainable future, together.",
                    "Construyendo juntos un futuro sostenible.",
                )
                .links("columns", &columns)
                .links("socialLinks", &social)
                .links("bottomLinks", &bottom_links)
                .translated(
                    "copyrightText",
                    "© 2024 Eco Nova. All rights reserved.",
                    "© 2024 Eco Nova. Todos los derechos reservados.",
                )
                .value("layout", "standard")
                .value("backgroundColor", "#111827")
                .value("accentColor", "#f9fafb")
                .value("showDivider", true),
        )
    }
}
