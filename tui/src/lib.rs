//! TUI rendering for Lavender using ratatui.

mod effects;
mod input;
mod theme;

pub use effects::{canvas_bounds, circle_rect};
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::{Marker, border},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap,
        canvas::{Canvas, Circle},
    },
};

use lavender_engine::{
    App, EmotionFamily, MEDITATION_MINUTES, PatternField, Screen, SettingsEntry, SettingsModal,
    format_clock, settings_entries, settings_entry_count,
};

const ASCII_BORDER: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Widest the emotion explorer column grows.
const FEEL_WIDTH: u16 = 72;

const FEEL_INTRO: &str =
    "Naming your feelings is the first step to processing them. How are you feeling right now?";

pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .areas(frame.area());

    draw_header(frame, app, header, &palette, &glyphs);
    match app.screen() {
        Screen::Breathe => draw_breathe(frame, app, body, &palette, &glyphs),
        Screen::Meditate => draw_meditate(frame, app, body, &palette, &glyphs),
        Screen::Feel => draw_feel(frame, app, body, &palette, &glyphs),
    }
    draw_footer(frame, app, footer, &palette, &glyphs);

    if let Some(settings) = app.settings() {
        draw_settings(frame, app, settings, &palette, &glyphs);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut spans = vec![
        Span::styled(" Lavender ", styles::title(palette)),
        Span::styled(format!(" {} ", glyphs.separator), styles::key_hint(palette)),
    ];
    for (i, screen) in Screen::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if *screen == app.screen() {
            styles::tab_active(palette)
        } else {
            styles::tab_inactive(palette)
        };
        spans.push(Span::styled(format!(" {} ", screen.title()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hints(pairs: &[(&'static str, &'static str)], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 3);
    for (i, (key, action)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        let action = format!(" {action}");
        spans.push(Span::styled(action, styles::key_hint(palette)));
    }
    Line::from(spans)
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let vertical = glyphs.keys_vertical;
    let hints: Vec<(&'static str, &'static str)> = if app.settings().is_some() {
        if app.breathing().selection().is_custom() {
            vec![
                (vertical, "move"),
                ("Enter", "select"),
                (glyphs.keys_horizontal, "field"),
                ("-/+", "adjust"),
                ("Esc", "close"),
            ]
        } else {
            vec![(vertical, "move"), ("Enter", "select"), ("Esc", "close")]
        }
    } else {
        match app.screen() {
            Screen::Breathe if app.session().is_running() => {
                vec![("Space", "end"), ("Tab", "meditate"), ("q", "quit")]
            }
            Screen::Breathe => vec![
                ("Space", "begin"),
                ("s", "pattern"),
                ("Tab", "meditate"),
                ("q", "quit"),
            ],
            Screen::Meditate => vec![
                ("Space", "start/pause"),
                ("r", "reset"),
                ("1-4", "duration"),
                ("Tab", "feel"),
                ("q", "quit"),
            ],
            Screen::Feel if app.emotions().family().is_some() => vec![
                (vertical, "move"),
                ("Enter", "name it"),
                ("Esc", "back to categories"),
                ("q", "quit"),
            ],
            Screen::Feel => vec![
                (vertical, "move"),
                ("Enter", "choose"),
                ("Tab", "breathe"),
                ("q", "quit"),
            ],
        }
    };
    let line = key_hints(&hints, palette);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

// ============================================================================
// Breathe
// ============================================================================

fn draw_breathe(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let session = app.session();
    let phase = session.phase();
    let accent = palette.phase(phase);
    let accent_bold = Style::default().fg(accent).add_modifier(Modifier::BOLD);

    let layout = Layout::vertical([Constraint::Min(5), Constraint::Length(7)]);
    let [circle_area, text_area] = layout.areas(area);

    draw_circle(frame, app, circle_area, accent, palette);

    // Countdown sits in the middle of the circle.
    let centre_text = if session.is_running() {
        session.seconds_remaining().to_string()
    } else {
        glyphs.play.to_string()
    };
    let centre = Rect {
        x: circle_area.x,
        y: circle_area.y + circle_area.height / 2,
        width: circle_area.width,
        height: circle_area.height.min(1),
    };
    let countdown = Paragraph::new(Span::styled(centre_text, accent_bold));
    frame.render_widget(countdown.alignment(Alignment::Center), centre);

    let selection = app.breathing().selection();
    let sub_text = phase.cue().unwrap_or_else(|| selection.description());
    let sub_style = Style::default().fg(palette.text_secondary);
    let mut lines = vec![
        Line::from(Span::styled(phase.instruction(), accent_bold)),
        Line::from(Span::styled(sub_text, sub_style)),
        Line::default(),
    ];
    if session.is_running() {
        let cycle = format!("Cycle: {}", session.cycle_count());
        lines.push(Line::from(Span::styled(cycle, palette.text_primary)));
    } else {
        let pattern = app.breathing().selected_pattern();
        let label = format!("{} {pattern}", selection.name());
        let affirmation = Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::ITALIC);
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.settings), palette.primary),
            Span::styled(label, palette.text_primary),
        ]));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(app.affirmation(), affirmation)));
    }
    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, text_area);
}

fn draw_circle(frame: &mut Frame, app: &App, area: Rect, accent: Color, palette: &Palette) {
    if area.is_empty() {
        return;
    }
    if app.ui_options().ascii_only {
        let rect = circle_rect(area, app.circle_scale());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ASCII_BORDER)
            .border_style(Style::default().fg(accent));
        frame.render_widget(block, rect);
    } else {
        let (x_bounds, y_bounds) = canvas_bounds(area);
        let radius = f64::from(app.circle_scale());
        let inner = palette.primary_dim;
        let canvas = Canvas::default()
            .background_color(palette.bg_dark)
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(move |ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: radius * 0.8,
                    color: inner,
                });
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius,
                    color: accent,
                });
            });
        frame.render_widget(canvas, area);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn draw_settings(
    frame: &mut Frame,
    app: &App,
    settings: &SettingsModal,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let rows = u16::try_from(settings_entry_count()).unwrap_or(u16::MAX);
    // Presets, custom, a blank line, the steppers, plus borders.
    let area = centered_rect(64, rows.saturating_add(4), frame.area());
    frame.render_widget(Clear, area);

    let border_type = if app.ui_options().ascii_only {
        BorderType::Plain
    } else {
        BorderType::Rounded
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_popup))
        .title(Span::styled(" Breathing pattern ", styles::title(palette)));
    if app.ui_options().ascii_only {
        block = block.border_set(ASCII_BORDER);
    }

    let breathing = app.breathing();
    let selection = breathing.selection();
    let mut lines = Vec::with_capacity(settings_entry_count() + 2);
    for (index, entry) in settings_entries().enumerate() {
        let cursor = if index == settings.cursor() {
            glyphs.selected
        } else {
            glyphs.unselected
        };
        let current = if entry.selection() == selection {
            glyphs.current
        } else {
            " "
        };
        let (name, pattern, description) = match entry {
            SettingsEntry::Preset(preset) => (
                preset.name(),
                preset.pattern().to_string(),
                preset.description(),
            ),
            SettingsEntry::Custom => (
                "Custom",
                breathing.custom().pattern().to_string(),
                entry.selection().description(),
            ),
        };
        let style = if index == settings.cursor() {
            styles::selected_row(palette)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{cursor}{current} {name:<8} {pattern:<8} "), style),
            Span::styled(description, Style::default().fg(palette.text_muted)),
        ]));
    }
    lines.push(Line::default());
    lines.push(custom_steppers(app, settings, palette, glyphs));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn custom_steppers(
    app: &App,
    settings: &SettingsModal,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Line<'static> {
    let breathing = app.breathing();
    let enabled = breathing.selection().is_custom();
    let custom = breathing.custom();
    let stepper = |active: bool| {
        if enabled && active {
            Style::default().fg(palette.primary)
        } else {
            styles::disabled(palette)
        }
    };

    let custom_glyph = format!(" {} ", glyphs.custom);
    let mut spans = vec![Span::styled(custom_glyph, palette.primary)];
    for field in PatternField::ALL {
        let label_style = if !enabled {
            styles::disabled(palette)
        } else if field == settings.field() {
            styles::key_highlight(palette)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        let down = stepper(!custom.at_min(field));
        let up = stepper(!custom.at_max(field));
        let value = format!("{:>3}s ", custom.get(field));
        spans.push(Span::styled(format!("{} ", field.label()), label_style));
        spans.push(Span::styled(glyphs.step_down, down));
        spans.push(Span::styled(value, label_style));
        spans.push(Span::styled(glyphs.step_up, up));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

// ============================================================================
// Meditate
// ============================================================================

fn draw_meditate(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let timer = app.meditation();

    let [_, clock_area, gauge_area, _, durations_area, status_area, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let state_glyph = if timer.is_running() {
        glyphs.pause
    } else {
        glyphs.play
    };
    let clock_style = Style::default()
        .fg(palette.text_primary)
        .add_modifier(Modifier::BOLD);
    let clock = Line::from(vec![
        Span::styled(format!("{state_glyph} "), palette.primary_dim),
        Span::styled(format_clock(timer.remaining_secs()), clock_style),
    ]);
    let clock = Paragraph::new(clock).alignment(Alignment::Center);
    frame.render_widget(clock, clock_area);

    let gauge_rect = centered_rect(area.width.saturating_mul(2) / 3, 1, gauge_area);
    let gauge = Gauge::default()
        .ratio(timer.progress())
        .label("")
        .use_unicode(!app.ui_options().ascii_only)
        .gauge_style(Style::default().fg(palette.primary).bg(palette.bg_panel));
    frame.render_widget(gauge, gauge_rect);

    let mut spans = Vec::with_capacity(MEDITATION_MINUTES.len() * 2);
    for (i, minutes) in MEDITATION_MINUTES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *minutes == timer.duration_minutes() {
            styles::tab_active(palette)
        } else {
            styles::tab_inactive(palette)
        };
        spans.push(Span::styled(format!(" {}:{minutes}m ", i + 1), style));
    }
    let durations = Paragraph::new(Line::from(spans));
    frame.render_widget(durations.alignment(Alignment::Center), durations_area);

    let (status, colour) = match app.status_message() {
        Some(message) => (message, palette.success),
        None if timer.is_running() => ("Breathe and be present", palette.text_muted),
        None if timer.remaining_secs() < timer.duration_secs() => ("Paused", palette.warning),
        None => ("Ready when you are", palette.text_muted),
    };
    let status = Paragraph::new(Span::styled(status, colour));
    frame.render_widget(status.alignment(Alignment::Center), status_area);
}

// ============================================================================
// Feel
// ============================================================================

fn draw_feel(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let explorer = app.emotions();
    let column = centered_rect(FEEL_WIDTH, area.height, area);

    // One extra row for the family heading once a family is chosen.
    let rows = u16::try_from(explorer.row_count() + 1).unwrap_or(u16::MAX);
    let [intro_area, list_area, detail_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(rows),
        Constraint::Min(0),
    ])
    .areas(column);

    let intro = vec![
        Line::from(Span::styled("Emotion Explorer", styles::title(palette))),
        Line::from(Span::styled(FEEL_INTRO, palette.text_secondary)),
    ];
    let intro = Paragraph::new(intro).wrap(Wrap { trim: true });
    frame.render_widget(intro, intro_area);

    let mut lines = Vec::with_capacity(explorer.row_count() + 1);
    match explorer.family() {
        None => {
            for (index, family) in EmotionFamily::ALL.iter().enumerate() {
                let row = FeelRow {
                    name: family.name(),
                    accent: palette.family(*family),
                    under_cursor: index == explorer.cursor(),
                    named: false,
                };
                lines.push(row.line(palette, glyphs));
            }
        }
        Some(family) => {
            let accent = palette.family(family);
            let heading = Style::default().fg(accent).add_modifier(Modifier::BOLD);
            lines.push(Line::from(Span::styled(family.name(), heading)));
            for (index, emotion) in family.emotions().iter().enumerate() {
                let row = FeelRow {
                    name: emotion.name(),
                    accent,
                    under_cursor: index == explorer.cursor(),
                    named: explorer.named() == Some(emotion),
                };
                lines.push(row.line(palette, glyphs));
            }
        }
    }
    frame.render_widget(Paragraph::new(lines), list_area);

    let (Some(family), Some(emotion)) = (explorer.family(), explorer.named()) else {
        return;
    };
    let heading = Style::default()
        .fg(palette.family(family))
        .add_modifier(Modifier::BOLD);
    let acknowledgement = emotion.acknowledgement();
    let detail = vec![
        Line::default(),
        Line::from(Span::styled(emotion.name(), heading)),
        Line::from(Span::styled(emotion.definition(), palette.text_secondary)),
        Line::default(),
        Line::from(Span::styled(acknowledgement, palette.text_primary)),
    ];
    let detail = Paragraph::new(detail).wrap(Wrap { trim: true });
    frame.render_widget(detail, detail_area);
}

struct FeelRow {
    name: &'static str,
    accent: Color,
    under_cursor: bool,
    named: bool,
}

impl FeelRow {
    fn line(&self, palette: &Palette, glyphs: &Glyphs) -> Line<'static> {
        let cursor = if self.under_cursor {
            glyphs.selected
        } else {
            glyphs.unselected
        };
        let marker = if self.named { glyphs.current } else { " " };
        let style = if self.under_cursor {
            styles::selected_row(palette)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        Line::from(vec![
            Span::styled(format!("{cursor}{marker} "), self.accent),
            Span::styled(self.name, style),
        ])
    }
}
