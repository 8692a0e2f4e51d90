use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be performed in the editor
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
  /// Quit the application
  Quit,
  /// Navigate up in a list
  NavigateUp,
  /// Navigate down in a list
  NavigateDown,
  /// Previous feature in the feature pane
  NavigateLeft,
  /// Next feature in the feature pane
  NavigateRight,
  /// Start editing the focused field
  Select,
  /// Close overlay or cancel an edit
  Back,
  /// Tab to next pane
  NextPanel,
  /// Shift-Tab to previous pane
  PrevPanel,
  /// Go to first entry
  GoToTop,
  /// Go to last entry
  GoToBottom,
  /// Toggle help overlay
  ToggleHelp,
  /// Render the next template (drops all sections)
  CycleTemplate,
  /// Switch to the next color scheme
  CycleColorScheme,
  AddTable,
  AddChart,
  AddCode,
  /// Remove the selected feature
  RemoveFeature,
  /// One more table row or chart point
  Grow,
  /// One less table row or chart point
  Shrink,
  GrowColumns,
  ShrinkColumns,
  /// Next chart type or code language
  CycleVariant,
  /// Generate the document
  Submit,
  /// Character input while editing
  Input(char),
  /// Line break while editing multi-line text
  Newline,
  /// Delete character while editing
  DeleteChar,
  /// Finish editing and store the value
  Commit,
  /// No action
  None,
}

/// Convert a key event to an action based on the current input mode
pub fn key_to_action(key: KeyEvent, in_input_mode: bool) -> Action {
  if in_input_mode {
    match key.code {
      KeyCode::Esc => Action::Back,
      KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => Action::Newline,
      KeyCode::Enter => Action::Commit,
      KeyCode::Backspace => Action::DeleteChar,
      KeyCode::Tab => Action::Input('\t'),
      KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Action::Input(c),
      _ => Action::None,
    }
  } else {
    match key.code {
      // Control chords first so they do not fall through to plain letters
      KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
      KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Submit,
      KeyCode::Char('q') => Action::Quit,

      // Navigation
      KeyCode::Char('j') | KeyCode::Down => Action::NavigateDown,
      KeyCode::Char('k') | KeyCode::Up => Action::NavigateUp,
      KeyCode::Char('h') | KeyCode::Left => Action::NavigateLeft,
      KeyCode::Char('l') | KeyCode::Right => Action::NavigateRight,
      KeyCode::Char('g') => Action::GoToTop,
      KeyCode::Char('G') => Action::GoToBottom,
      KeyCode::Enter => Action::Select,
      KeyCode::Esc => Action::Back,
      KeyCode::Tab => Action::NextPanel,
      KeyCode::BackTab => Action::PrevPanel,

      // Form
      KeyCode::Char('T') => Action::CycleTemplate,
      KeyCode::Char('C') => Action::CycleColorScheme,

      // Features
      KeyCode::Char('t') => Action::AddTable,
      KeyCode::Char('c') => Action::AddChart,
      KeyCode::Char('o') => Action::AddCode,
      KeyCode::Char('x') | KeyCode::Delete => Action::RemoveFeature,
      KeyCode::Char('+') | KeyCode::Char('=') => Action::Grow,
      KeyCode::Char('-') => Action::Shrink,
      KeyCode::Char(']') => Action::GrowColumns,
      KeyCode::Char('[') => Action::ShrinkColumns,
      KeyCode::Char('y') => Action::CycleVariant,

      KeyCode::Char('?') => Action::ToggleHelp,

      _ => Action::None,
    }
  }
}
