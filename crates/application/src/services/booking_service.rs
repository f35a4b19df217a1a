//! Booking service
//!
//! The conversation router: parses a chat message into a command, resolves
//! the requested window, asks the calendar whether it is free, and either
//! books the event or proposes the day's free alternatives. Also exposes
//! the direct availability path used by the HTTP availability endpoint.

use std::{fmt, sync::Arc};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, instrument};

use crate::{
    command_parser::CommandParser,
    error::ApplicationError,
    ports::{CalendarError, CalendarPort},
    scheduling::{DEFAULT_MIN_SLOT_MINUTES, compute_free_slots},
    time_parser,
};
use domain::{AgentCommand, BusinessHours, TimeWindow};

/// Scheduling policy applied to every request
#[derive(Debug, Clone)]
pub struct SchedulingPolicy {
    /// Bookable hours of the day
    pub business_hours: BusinessHours,
    /// Minimum length of an offered free slot
    pub min_slot_minutes: i64,
    /// Summary used for booked events
    pub event_summary: String,
}

impl Default for SchedulingPolicy {
    fn default() -> Self {
        Self {
            business_hours: BusinessHours::default(),
            min_slot_minutes: DEFAULT_MIN_SLOT_MINUTES,
            event_summary: "Meeting with AI Assistant".to_string(),
        }
    }
}

/// Free slots of a single day, paired with the resolved date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    /// The day the query resolved to
    pub date: NaiveDate,
    /// Free slots in ascending order; empty is a valid "no slots" state
    pub slots: Vec<TimeWindow>,
}

/// Booking service for handling scheduling conversations
pub struct BookingService {
    calendar: Arc<dyn CalendarPort>,
    parser: CommandParser,
    policy: SchedulingPolicy,
}

impl fmt::Debug for BookingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl BookingService {
    /// Create a new booking service
    pub fn new(calendar: Arc<dyn CalendarPort>, policy: SchedulingPolicy) -> Self {
        Self {
            calendar,
            parser: CommandParser::new(),
            policy,
        }
    }

    /// Handle a chat message and produce the assistant's reply text
    ///
    /// `now` is the reference instant for all date resolution; it is passed
    /// in rather than read from the clock so conversations replay
    /// deterministically under test.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn handle_message(
        &self,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<String, ApplicationError> {
        match self.parser.parse(text) {
            AgentCommand::ShowAvailability { date_text } => {
                let day = self.availability_for(Some(&date_text), now).await?;
                Ok(render_availability_reply(&day))
            },
            AgentCommand::BookMeeting { text } => self.book_or_propose(&text, now).await,
        }
    }

    /// Free slots for the day a date expression resolves to
    ///
    /// `None` means "tomorrow", matching the availability endpoint's
    /// default.
    #[instrument(skip(self, date_text))]
    pub async fn availability_for(
        &self,
        date_text: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<DayAvailability, ApplicationError> {
        let date = time_parser::resolve_date_or_default(date_text, now);
        self.day_slots(date).await
    }

    /// Resolve the requested window, then book it or propose alternatives
    async fn book_or_propose(
        &self,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<String, ApplicationError> {
        let window = time_parser::resolve(text, now, &self.policy.business_hours)?;

        let busy = self
            .calendar
            .list_busy_intervals(window.start(), window.end())
            .await
            .map_err(map_error)?;

        // Zero busy intervals inside the window is the availability check
        if busy.is_empty() {
            let link = self
                .calendar
                .create_event(&self.policy.event_summary, window.start(), window.end())
                .await
                .map_err(map_error)?;
            info!(window = %window, "Booked meeting");
            return Ok(format!(
                "\u{2705} Your meeting is booked for {}!\n[View on Calendar]({link})",
                window.start().format("%Y-%m-%d %H:%M UTC")
            ));
        }

        let day = self.day_slots(window.start().date_naive()).await?;
        info!(date = %day.date, alternatives = day.slots.len(), "Requested window not free");
        if day.slots.is_empty() {
            Ok(format!(
                "\u{274c} Sorry, that time is not available, and there are no other free slots on {}.",
                day.date
            ))
        } else {
            Ok(format!(
                "\u{274c} Sorry, that time is not available.\n\u{2705} But here are other free slots on {}:\n{}",
                day.date,
                render_slot_list(&day.slots)
            ))
        }
    }

    /// Check whether the calendar backend is reachable
    pub async fn calendar_is_available(&self) -> bool {
        self.calendar.is_available().await
    }

    /// Fetch the day's busy intervals and sweep them into free slots
    async fn day_slots(&self, date: NaiveDate) -> Result<DayAvailability, ApplicationError> {
        let day = self.policy.business_hours.day_window(date);
        let busy = self
            .calendar
            .list_busy_intervals(day.start(), day.end())
            .await
            .map_err(map_error)?;
        let slots = compute_free_slots(&day, &busy, self.policy.min_slot_minutes);
        Ok(DayAvailability { date, slots })
    }
}

/// Render the reply for an availability query
fn render_availability_reply(day: &DayAvailability) -> String {
    if day.slots.is_empty() {
        format!("\u{274c} Sorry, no free slots found for {}.", day.date)
    } else {
        format!(
            "\u{2705} Available slots for {}:\n{}",
            day.date,
            render_slot_list(&day.slots)
        )
    }
}

/// Render slots as a bullet list of `HH:MM–HH:MM UTC` lines
fn render_slot_list(slots: &[TimeWindow]) -> String {
    slots
        .iter()
        .map(|slot| format!("- {slot}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Map calendar errors to application errors
fn map_error(err: CalendarError) -> ApplicationError {
    match err {
        CalendarError::ServiceUnavailable => {
            ApplicationError::ExternalService("Calendar service unavailable".to_string())
        },
        CalendarError::AuthenticationFailed => {
            ApplicationError::NotAuthorized("Calendar authentication failed".to_string())
        },
        CalendarError::OperationFailed(msg) => ApplicationError::ExternalService(msg),
        CalendarError::InvalidDateTime(msg) => {
            ApplicationError::ExternalService(format!("Invalid date/time from provider: {msg}"))
        },
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::sync::Mutex;

    use super::*;

    /// Mock port recording calls and serving canned busy intervals
    struct MockCalendarPort {
        busy: Vec<TimeWindow>,
        fail_listing: bool,
        created: Mutex<Vec<(String, DateTime<Utc>, DateTime<Utc>)>>,
    }

    impl MockCalendarPort {
        fn with_busy(busy: Vec<TimeWindow>) -> Self {
            Self {
                busy,
                fail_listing: false,
                created: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                busy: Vec::new(),
                fail_listing: true,
                created: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CalendarPort for MockCalendarPort {
        async fn list_busy_intervals(
            &self,
            time_min: DateTime<Utc>,
            time_max: DateTime<Utc>,
        ) -> Result<Vec<TimeWindow>, CalendarError> {
            if self.fail_listing {
                return Err(CalendarError::ServiceUnavailable);
            }
            let query = TimeWindow::new(time_min, time_max)
                .map_err(|e| CalendarError::InvalidDateTime(e.to_string()))?;
            Ok(self
                .busy
                .iter()
                .filter(|interval| interval.overlaps(&query))
                .copied()
                .collect())
        }

        async fn create_event(
            &self,
            summary: &str,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> Result<String, CalendarError> {
            self.created
                .lock()
                .unwrap()
                .push((summary.to_string(), start, end));
            Ok("https://calendar.example.com/event/abc123".to_string())
        }

        async fn is_available(&self) -> bool {
            !self.fail_listing
        }
    }

    /// 2024-01-01 is a Monday
    fn monday_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn tue(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, h, 0, 0).unwrap()
    }

    fn service(port: MockCalendarPort) -> (BookingService, Arc<MockCalendarPort>) {
        let port = Arc::new(port);
        (
            BookingService::new(port.clone(), SchedulingPolicy::default()),
            port,
        )
    }

    #[tokio::test]
    async fn free_window_is_booked_with_link() {
        let (service, port) = service(MockCalendarPort::with_busy(vec![]));

        let reply = service
            .handle_message("book a meeting tomorrow between 2-4pm", monday_noon())
            .await
            .unwrap();

        assert!(reply.starts_with("\u{2705} Your meeting is booked for 2024-01-02 14:00 UTC!"));
        assert!(reply.contains("https://calendar.example.com/event/abc123"));

        let created = port.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].0, "Meeting with AI Assistant");
        assert_eq!(created[0].1, tue(14));
        assert_eq!(created[0].2, tue(16));
    }

    #[tokio::test]
    async fn conflicting_window_proposes_alternatives() {
        let busy = vec![TimeWindow::new(tue(14), tue(16)).unwrap()];
        let (service, port) = service(MockCalendarPort::with_busy(busy));

        let reply = service
            .handle_message("book a meeting tomorrow between 2-4pm", monday_noon())
            .await
            .unwrap();

        assert!(reply.starts_with("\u{274c} Sorry, that time is not available."));
        assert!(reply.contains("free slots on 2024-01-02"));
        assert!(reply.contains("- 09:00\u{2013}14:00 UTC"));
        assert!(reply.contains("- 16:00\u{2013}18:00 UTC"));
        assert!(port.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn fully_booked_day_reports_no_alternatives() {
        let busy = vec![TimeWindow::new(tue(9), tue(18)).unwrap()];
        let (service, _) = service(MockCalendarPort::with_busy(busy));

        let reply = service
            .handle_message("book a meeting tomorrow at 10am", monday_noon())
            .await
            .unwrap();

        assert_eq!(
            reply,
            "\u{274c} Sorry, that time is not available, and there are no other free slots on 2024-01-02."
        );
    }

    #[tokio::test]
    async fn availability_query_lists_slots() {
        let busy = vec![TimeWindow::new(tue(10), tue(11)).unwrap()];
        let (service, _) = service(MockCalendarPort::with_busy(busy));

        let reply = service
            .handle_message("show availability tomorrow", monday_noon())
            .await
            .unwrap();

        assert!(reply.starts_with("\u{2705} Available slots for 2024-01-02:"));
        assert!(reply.contains("- 09:00\u{2013}10:00 UTC"));
        assert!(reply.contains("- 11:00\u{2013}18:00 UTC"));
    }

    #[tokio::test]
    async fn availability_query_with_no_slots_reports_none() {
        let busy = vec![TimeWindow::new(tue(9), tue(18)).unwrap()];
        let (service, _) = service(MockCalendarPort::with_busy(busy));

        let reply = service
            .handle_message("free slots tomorrow?", monday_noon())
            .await
            .unwrap();

        assert_eq!(reply, "\u{274c} Sorry, no free slots found for 2024-01-02.");
    }

    #[tokio::test]
    async fn availability_for_defaults_to_tomorrow() {
        let (service, _) = service(MockCalendarPort::with_busy(vec![]));

        let day = service.availability_for(None, monday_noon()).await.unwrap();

        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(day.slots, vec![TimeWindow::new(tue(9), tue(18)).unwrap()]);
    }

    #[tokio::test]
    async fn availability_for_resolves_explicit_date() {
        let (service, _) = service(MockCalendarPort::with_busy(vec![]));

        let day = service
            .availability_for(Some("2024-03-05"), monday_noon())
            .await
            .unwrap();

        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(day.slots.len(), 1);
    }

    #[tokio::test]
    async fn calendar_failure_surfaces_as_external_service_error() {
        let (service, _) = service(MockCalendarPort::failing());

        let result = service
            .handle_message("book a meeting tomorrow", monday_noon())
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::ExternalService(_))
        ));
    }

    #[tokio::test]
    async fn empty_message_is_invalid_input() {
        let (service, _) = service(MockCalendarPort::with_busy(vec![]));

        let result = service.handle_message("   ", monday_noon()).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(domain::DomainError::InvalidInput(_)))
        ));
    }

    #[tokio::test]
    async fn custom_policy_changes_summary_and_minimum() {
        let port = Arc::new(MockCalendarPort::with_busy(vec![]));
        let policy = SchedulingPolicy {
            event_summary: "Intro call".to_string(),
            ..SchedulingPolicy::default()
        };
        let service = BookingService::new(port.clone(), policy);

        service
            .handle_message("tomorrow at 10am", monday_noon())
            .await
            .unwrap();

        assert_eq!(port.created.lock().unwrap()[0].0, "Intro call");
    }

    #[test]
    fn booking_service_debug_output() {
        let port = Arc::new(MockCalendarPort::with_busy(vec![]));
        let service = BookingService::new(port, SchedulingPolicy::default());
        let debug = format!("{service:?}");
        assert!(debug.contains("BookingService"));
        assert!(debug.contains("policy"));
    }
}
