use folio_contact::{ContactForm, ContactSubmission, NotificationEmail};
use folio_notification::EmailConfig;

#[derive(clap::Args)]
pub struct PreviewArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    subject: String,
    /// Message body; `\n` sequences are turned into line breaks
    #[arg(long)]
    message: String,
    #[arg(long)]
    project_type: Option<String>,
    /// Print the plain text body instead of the HTML one
    #[arg(long)]
    plain: bool,
}

/// Validates a submission and prints the notification it would produce.
pub fn preview(config: folio::Config, args: PreviewArgs) -> anyhow::Result<()> {
    println!("{}", render(&config.email, args)?);

    Ok(())
}

fn render(config: &EmailConfig, args: PreviewArgs) -> anyhow::Result<String> {
    let submission = ContactSubmission::try_from(ContactForm {
        name: Some(args.name),
        email: Some(args.email),
        subject: Some(args.subject),
        message: Some(args.message.replace("\\n", "\n")),
        project_type: args.project_type,
    })?;

    let email = NotificationEmail::for_submission(
        &submission,
        &config.from_address,
        &config.contact_address,
    )?;

    let body = if args.plain { email.plain } else { email.html };

    Ok(format!(
        "From: {}\nTo: {}\nSubject: {}\n\n{}",
        email.from, email.to, email.subject, body
    ))
}
