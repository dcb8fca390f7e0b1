use std::fmt::{self, Debug, Formatter, Write as _};
use std::io::Write as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, Layer};

use super::{Batch, StringFormatter};

/// A [`tracing_subscriber`] [`Layer`] which writes every event to `W`, passing its message through
/// a [`Batch`] of formatters first.
///
/// Each event becomes one line of the form `LEVEL message key=value...`. Only the message is
/// formatted, other fields are appended as recorded. While the layer is inactive, messages are
/// written unchanged.
///
/// Clones share their formatters and active flag, so one clone can be installed in a subscriber
/// while another is kept to reconfigure it.
///
/// # Examples
/// ```
/// # use dzlib::format::{FormattingLayer, UpperCase};
/// # use tracing_subscriber::layer::SubscriberExt;
/// let layer = FormattingLayer::new(std::io::stderr);
/// layer.add(UpperCase);
///
/// let subscriber = tracing_subscriber::registry().with(layer.clone());
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::info!("written as INFO SHOUTED");
///     layer.set_active(false);
///     tracing::info!("written as it is");
/// });
/// ```
pub struct FormattingLayer<W> {
    pub(crate) shared: Arc<Shared<W>>,
}

pub(crate) struct Shared<W> {
    formatters: RwLock<Batch>,
    active: AtomicBool,
    make_writer: W,
}

impl<W> FormattingLayer<W> {
    /// Creates an active layer with no formatters, writing through `make_writer`.
    pub fn new(make_writer: W) -> FormattingLayer<W> {
        FormattingLayer::from_batch(Batch::new(), make_writer)
    }

    /// Creates an active layer which applies `formatters`, writing through `make_writer`.
    pub fn from_batch(formatters: Batch, make_writer: W) -> FormattingLayer<W> {
        FormattingLayer {
            shared: Arc::new(Shared {
                formatters: RwLock::new(formatters),
                active: AtomicBool::new(true),
                make_writer,
            }),
        }
    }

    pub fn is_active(&self) -> bool {
        self.shared.active.load(Ordering::Relaxed)
    }

    /// Turns formatting on or off for this layer and all of its clones.
    pub fn set_active(&self, active: bool) -> &Self {
        self.shared.active.store(active, Ordering::Relaxed);
        self
    }

    /// Appends `formatter` to the layer's batch.
    pub fn add<F: StringFormatter + 'static>(&self, formatter: F) -> &Self {
        self.shared.formatters.write().add(formatter);
        self
    }

    /// Removes and returns the formatter at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&self, index: usize) -> Box<dyn StringFormatter> {
        self.shared.formatters.write().remove(index)
    }

    /// Returns the number of formatters applied to each message.
    pub fn len(&self) -> usize {
        self.shared.formatters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.formatters.read().is_empty()
    }

    /// Removes every formatter.
    pub fn clear(&self) {
        *self.shared.formatters.write() = Batch::new();
    }

    /// Returns `message` as this layer would write it.
    pub fn format_message(&self, message: &str) -> String {
        if self.is_active() {
            self.shared.formatters.read().format(message)
        } else {
            message.to_owned()
        }
    }
}

impl<S, W> Layer<S> for FormattingLayer<W>
where
    S: Subscriber,
    W: for<'w> MakeWriter<'w> + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = EventFields::default();
        event.record(&mut fields);

        let metadata = event.metadata();
        let message = self.format_message(&fields.message);
        let mut writer = self.shared.make_writer.make_writer_for(metadata);
        // There is nowhere left to report a failed write.
        let _ = writeln!(writer, "{} {}{}", metadata.level(), message, fields.rest);
    }
}

impl<W> Clone for FormattingLayer<W> {
    fn clone(&self) -> Self {
        FormattingLayer {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<W> Debug for FormattingLayer<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormattingLayer")
            .field("active", &self.is_active())
            .field("formatters", &self.len())
            .finish()
    }
}

/// Splits an event into its message and the rest of its fields, rendered as ` key=value` pairs.
#[derive(Default)]
struct EventFields {
    message: String,
    rest: String,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        // Writing to a String can't fail.
        let _ = if field.name() == "message" {
            write!(self.message, "{value:?}")
        } else {
            write!(self.rest, " {}={value:?}", field.name())
        };
    }
}
