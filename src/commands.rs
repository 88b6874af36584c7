use std::io::Write;

use chrono::NaiveDate;
use console::{style, Attribute};
use tracing::info;
use url::Url;

use crate::config::MailConfig;
use crate::error::{Error, Result};
use crate::mailer::{subject_for, MailTransport, Mailer};
use crate::render::print_entry;
use crate::select::{self, RetryPolicy, THUMBS_UP_THRESHOLD};
use crate::urbandict::{self, Entry, Transport};

pub struct Context<'a> {
    pub transport: &'a dyn Transport,
    pub mail_transport: &'a dyn MailTransport,
    pub mail_config: &'a MailConfig,
    pub retry: RetryPolicy,
    pub threshold: u64,
    pub debug: bool,
}

impl<'a> Context<'a> {
    pub fn new(
        transport: &'a dyn Transport,
        mail_transport: &'a dyn MailTransport,
        mail_config: &'a MailConfig,
    ) -> Self {
        Context {
            transport,
            mail_transport,
            mail_config,
            retry: RetryPolicy::default(),
            threshold: THUMBS_UP_THRESHOLD,
            debug: false,
        }
    }

    fn show_url(&self, out: &mut dyn Write, url: &Url) -> Result<()> {
        if self.debug {
            writeln!(out, "url: {}", style(url).attr(Attribute::Underlined))?;
        }
        Ok(())
    }

    fn random_word(&self, out: &mut dyn Write) -> Result<Entry> {
        self.show_url(out, &urbandict::random_url()?)?;
        select::random_word(self.transport, self.threshold, self.retry)
    }
}

/// `send [recipient]`: show a random word, and mail it when a recipient is given.
pub fn send(ctx: &Context, recipient: Option<&str>, today: NaiveDate, out: &mut dyn Write) -> Result<()> {
    let entry = ctx.random_word(out)?;
    print_entry(out, &entry)?;
    if let Some(recipient) = recipient {
        let subject = subject_for(today);
        Mailer::new(ctx.mail_config, ctx.mail_transport).send_word(&entry, &subject, recipient)?;
    }
    Ok(())
}

pub fn display(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let entry = ctx.random_word(out)?;
    print_entry(out, &entry)?;
    Ok(())
}

/// `word <term>`: show the best voted definition of `term`.
pub fn define(ctx: &Context, args: &[String], out: &mut dyn Write) -> Result<()> {
    let [term] = args else {
        writeln!(out, "Usage: urbano word|w word")?;
        return Ok(());
    };
    ctx.show_url(out, &urbandict::define_url(term)?)?;
    let entries = urbandict::fetch_by_term(ctx.transport, term)?;
    match select::select_most_voted(&entries.list, term) {
        Ok(entry) => print_entry(out, entry)?,
        Err(Error::NotFound { term }) => {
            info!(%term, "no definition");
            writeln!(out, "Sorry, {} is not on Urban Dictionary.", term)?;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
