use std::sync::Arc;

use folio_templates_contracts::{Template, TemplateService, BASE_TEMPLATE, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone, Default)]
pub struct TemplateServiceImpl {
    state: State,
}

impl TemplateServiceImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();

        tera.add_raw_template("base", BASE_TEMPLATE).unwrap();

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template).unwrap();
        }

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.state.0.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use folio_templates_contracts::{AcknowledgementTemplate, OwnerNotificationTemplate};

    use super::*;

    #[test]
    fn owner_notification() {
        let body = render(OwnerNotificationTemplate {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Hello".into(),
            message: "I'd like to talk about a project.".into(),
        });

        // submitted values must appear verbatim in the rendered body
        assert!(body.contains("Jane Doe"));
        assert!(body.contains("jane@example.com"));
        assert!(body.contains("Hello"));
        assert!(body.contains("I'd like to talk about a project."));
    }

    #[test]
    fn acknowledgement() {
        let body = render(AcknowledgementTemplate {
            name: "Jane Doe".into(),
            subject: "Hello".into(),
        });

        assert!(body.contains("Jane Doe"));
        assert!(body.contains("Hello"));
    }

    fn render<T: Template + 'static>(template: T) -> String {
        // Arrange
        let sut = TemplateServiceImpl::new();

        // Act
        let result = sut.render(&template);

        // Assert
        result.unwrap()
    }
}
