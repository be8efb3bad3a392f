use bubbletea_rs::{KeyMsg, Msg};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyModifiers};
use newyear_countdown::prelude::*;
use newyear_countdown::theme::{self, with_glyphs, with_radius};
use std::time::Duration;

struct Fixed(DateTime<FixedOffset>);

impl Clock for Fixed {
    type Tz = FixedOffset;

    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

fn moscow(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .unwrap()
}

fn plain(s: &str) -> String {
    String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
}

#[test]
fn test_last_second_of_year() {
    for year in [1999, 2024, 2025, 2100] {
        let now = moscow(year, 12, 31, 23, 59, 59);
        assert_eq!(seconds_until_next_year(&now).unwrap(), 1, "year {}", year);
    }
}

#[test]
fn test_first_second_of_year() {
    let leap = moscow(2028, 1, 1, 0, 0, 0);
    assert_eq!(seconds_until_next_year(&leap).unwrap(), 366 * 86_400);

    let common = moscow(2027, 1, 1, 0, 0, 0);
    assert_eq!(seconds_until_next_year(&common).unwrap(), 365 * 86_400);

    let century = Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(seconds_until_next_year(&century).unwrap(), 365 * 86_400);
}

#[test]
fn test_same_instant_in_different_zones() {
    // 21:00 UTC on Dec 31 is already midnight in Moscow.
    let utc = Utc.with_ymd_and_hms(2025, 12, 31, 21, 0, 0).unwrap();
    let msk = utc.with_timezone(&FixedOffset::east_opt(3 * 3600).unwrap());

    assert_eq!(seconds_until_next_year(&utc).unwrap(), 3 * 3600);
    assert_eq!(seconds_until_next_year(&msk).unwrap(), 365 * 86_400);
}

#[test]
fn test_plural_labels() {
    let day = |n| plural_label(n, "день", "дня", "дней");
    assert_eq!(day(1), "день");
    assert_eq!(day(2), "дня");
    assert_eq!(day(5), "дней");
    assert_eq!(day(11), "дней");
    assert_eq!(day(21), "день");
}

#[test]
fn test_every_unit_value_gets_a_label() {
    for unit in TimeUnit::ALL {
        for value in 0..=unit.max() {
            let label = unit.label(value);
            let forms = unit.forms();
            assert!(
                label == forms.one || label == forms.few || label == forms.many,
                "{:?} {}",
                unit,
                value
            );
        }
    }
}

#[test]
fn test_display_on_fixed_clock() {
    let clock = Fixed(moscow(2025, 12, 31, 22, 58, 59));
    let mut display = Countdown::new(clock, Theme::compact());
    let _cmd = display.init();

    assert_eq!(display.seconds_left(), 3661);
    assert_eq!(
        display.parts(),
        TimeParts { days: 0, hours: 1, minutes: 1, seconds: 1 }
    );

    let view = plain(&display.view());
    assert!(view.contains("До 2026 года осталось"));
    for label in ["дней", "час", "минута", "секунда"] {
        assert!(view.contains(label), "missing {:?}", label);
    }
}

#[test]
fn test_nothing_happens_after_teardown() {
    let clock = Fixed(moscow(2025, 6, 1, 12, 0, 0));
    let mut display = Countdown::new(clock, Theme::default());
    let _cmd = display.init();
    let before = display.seconds_left();

    display.deactivate();

    let key: Msg = Box::new(KeyMsg {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
    });
    assert!(display.update(key).is_none());
    assert_eq!(display.seconds_left(), before);
    assert!(!display.is_active());
}

#[test]
fn test_ring_presets_render() {
    let ring: Ring = newyear_countdown::ring::new(&theme::new(&[
        with_radius(2),
        with_glyphs('#', '.'),
    ]));
    let view = plain(&ring.view_as(1.0, 24, "часа"));
    assert!(view.contains("24"));
    assert!(view.contains("часа"));
    assert!(!view.contains('.'));
}

#[tokio::test]
async fn test_cancelled_ticker_rejects_delivered_tick() {
    let mut ticker = Ticker::with_interval(Duration::from_millis(5));
    let cmd = ticker.start();

    ticker.cancel();

    let msg = cmd.await.expect("tick still fires after cancel");
    let tick = msg.downcast_ref::<TickMsg>().expect("message is a TickMsg");
    assert_eq!(tick.id, ticker.id());
    assert!(!ticker.accepts(tick));
    assert!(ticker.next().is_none());
}
