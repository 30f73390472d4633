use folio_core_contact_contracts::{ContactSendMessageError, ContactService};
use folio_email_contracts::{ContentType, Email, EmailService};
use folio_models::{contact::ContactMessage, email_address::EmailAddressWithName};
use folio_templates_contracts::{AcknowledgementTemplate, OwnerNotificationTemplate, TemplateService};
use futures::future;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Where owner notifications are delivered.
    pub recipient: EmailAddressWithName,
}

impl<Email, Template> ContactServiceImpl<Email, Template> {
    pub fn new(email: Email, template: Template, config: ContactServiceConfig) -> Self {
        Self {
            email,
            template,
            config,
        }
    }
}

impl<EmailS, TemplateS> ContactService for ContactServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_message(&self, message: ContactMessage) -> Result<(), ContactSendMessageError> {
        let ContactMessage {
            author,
            subject,
            content,
        } = message;

        // replies to the notification go straight back to the author
        let author_mailbox = author
            .email
            .clone()
            .with_name(author.name.clone().into_inner());

        let notification = Email {
            recipient: self.config.recipient.clone(),
            subject: format!("[Contact Form] {}", *subject),
            body: self.template.render(&OwnerNotificationTemplate {
                name: author.name.clone().into_inner(),
                email: author.email.as_str().into(),
                subject: subject.clone().into_inner(),
                message: content.into_inner(),
            })?,
            content_type: ContentType::Html,
            reply_to: Some(author_mailbox.clone()),
        };

        let first_name = author
            .name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_owned();
        let acknowledgement = Email {
            recipient: author_mailbox,
            subject: format!("Thank you {first_name}! Your message is on its way"),
            body: self.template.render(&AcknowledgementTemplate {
                name: author.name.into_inner(),
                subject: subject.into_inner(),
            })?,
            content_type: ContentType::Html,
            reply_to: None,
        };

        // Both sends are always attempted. A failure of either one fails the
        // whole submission, even if the other email was already delivered.
        let (notification_sent, acknowledgement_sent) = future::join(
            self.email.send(notification),
            self.email.send(acknowledgement),
        )
        .await;

        let notification_sent = notification_sent?;
        let acknowledgement_sent = acknowledgement_sent?;
        if !(notification_sent && acknowledgement_sent) {
            return Err(ContactSendMessageError::Send);
        }

        Ok(())
    }
}
