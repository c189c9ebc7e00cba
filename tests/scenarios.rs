use spark_widgets::layout::{BoundedText, create_centered_window, paint_bounded};
use spark_widgets::prelude::*;

#[test]
fn menu_scrolls_to_third_option() {
    let surface = shared(CellSurface::new(10, 20));
    let mut menu = MenuSelector::new(surface.clone(), WindowId::ROOT, ["A", "B", "C"], MenuProps {
        height: 2,
        ..Default::default()
    })
    .unwrap();

    menu.handle_input(KeyCode::Down);
    menu.handle_input(KeyCode::Down);
    assert_eq!(menu.selected(), 2);
    assert_eq!(menu.first_visible(), 1);

    menu.draw(true).unwrap();
    let s = surface.borrow();
    assert_eq!(s.row_text(0).trim_end(), " B");
    assert_eq!(s.row_text(1).trim_end(), " C");
}

#[test]
fn text_box_wraps_typed_word() {
    let surface = shared(CellSurface::new(10, 20));
    let mut text_box = TextBox::new(surface.clone(), WindowId::ROOT, TextBoxProps {
        height: 4,
        width: 7,
        ..Default::default()
    })
    .unwrap();

    for key in keys_for("HELLOWORLD") {
        text_box.handle_input(key);
    }
    assert_eq!(text_box.lines(), ["HELLO", "WORLD"]);
    assert_eq!(text_box.cursor(), (2, 6));

    text_box.draw(true).unwrap();
    let caret = surface.borrow().cursor();
    assert_eq!((caret.row, caret.col), (2, 5));
}

#[test]
fn input_field_rejects_fourth_key() {
    let surface = shared(CellSurface::new(3, 10));
    let mut field = InputField::new(surface, WindowId::ROOT, InputFieldProps {
        label: "Name:".into(),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(field.max_length(), 3);
    for key in keys_for("abcd") {
        field.handle_input(key);
    }
    assert_eq!(field.value(), "abc");
}

#[test]
fn form_round_trip() {
    let mut keys = keys_for("ana");
    keys.push(KeyCode::Tab);
    keys.push(KeyCode::Char('i'));
    keys.extend(keys_for("hi there"));
    keys.push(KeyCode::Escape);
    keys.extend(keys_for("ignored"));
    keys.push(KeyCode::Tab);
    keys.push(KeyCode::Right);
    keys.push(KeyCode::Enter);

    let surface = shared(CellSurface::new(12, 40).with_keys(keys));
    let name = InputField::new(surface.clone(), WindowId::ROOT, InputFieldProps {
        label: "Name:".into(),
        ..Default::default()
    })
    .unwrap();
    let notes = TextBox::new(surface.clone(), WindowId::ROOT, TextBoxProps {
        row: 2,
        height: 5,
        width: 12,
        activation_key: Some('i'),
        ..Default::default()
    })
    .unwrap();
    let buttons = MenuSelector::new(surface.clone(), WindowId::ROOT, ["Save", "Cancel"], MenuProps {
        row: 8,
        orientation: Orientation::Horizontal,
        ..Default::default()
    })
    .unwrap();

    let widgets: Vec<Box<dyn Widget>> = vec![Box::new(name), Box::new(notes), Box::new(buttons)];
    let mut focus = FocusManager::new(surface.clone(), widgets).unwrap();
    assert_eq!(surface.borrow().window_count(), 4);

    assert_eq!(focus.run().unwrap(), (2, 1));
    let values: Vec<Option<String>> = focus.widgets().iter().map(|w| w.value()).collect();
    assert_eq!(
        values,
        vec![Some("ana".to_string()), Some("hi there".to_string()), None]
    );

    {
        let s = surface.borrow();
        assert_eq!(s.row_text(0).trim_end(), "Name: ana");
        assert_eq!(s.row_text(3).trim_end(), "│hi there  │");
        assert_eq!(s.row_text(8).trim_end(), "Save Cancel");
    }

    focus.close_all().unwrap();
    assert_eq!(surface.borrow().window_count(), 1);
    assert_eq!(surface.borrow().row_text(0).trim_end(), "");
}

#[test]
fn windows_released_when_loop_aborts() {
    let surface = shared(CellSurface::new(10, 30).with_keys([KeyCode::Tab]));
    let field = InputField::new(surface.clone(), WindowId::ROOT, InputFieldProps::default()).unwrap();
    let text_box = TextBox::new(surface.clone(), WindowId::ROOT, TextBoxProps {
        row: 1,
        ..Default::default()
    })
    .unwrap();

    let widgets: Vec<Box<dyn Widget>> = vec![Box::new(field), Box::new(text_box)];
    let mut focus = FocusManager::new(surface.clone(), widgets).unwrap();
    assert!(matches!(focus.run(), Err(WidgetError::InputExhausted)));
    assert_eq!(focus.active_index(), 1);

    drop(focus);
    assert_eq!(surface.borrow().window_count(), 1);
}

#[test]
fn dialog_with_bounded_message() {
    let mut s = CellSurface::new(12, 30).with_border(BorderStyle::Ascii);
    let dialog = create_centered_window(&mut s, 6, 12).unwrap();

    let message = "a fairly long message that will not fit in the box";
    let next = paint_bounded(&mut s, dialog, message, &BoundedText {
        row: 1,
        extra_lines: 10,
        reserved_rows: 1,
        ..Default::default()
    })
    .unwrap();

    // 10 usable columns; rows 1..=4 above the reserved bottom row
    assert_eq!(next, 5);
    assert_eq!(s.window_row_text(dialog, 1).unwrap(), "|a fairly l|");
    assert_eq!(s.window_row_text(dialog, 2).unwrap(), "|ong messag|");
    assert_eq!(s.window_row_text(dialog, 4).unwrap(), "|l not fit |");
    assert_eq!(s.window_row_text(dialog, 5).unwrap(), "+----------+");
}
