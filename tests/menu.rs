mod common;

mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use myrtio_lcd_menu::{
        Command, ConfigStore, ContrastOption, Menu, MenuEntry, MenuOption, MenuTree, Mode,
        OptionContext, ROW_WIDTH, SELECTION_GLYPH, option::ColorOption, renderer::Canvas,
    };

    use crate::common::{MockDisplay, RecordingBacklight, row};

    /// Option relying on the trait defaults for every command
    struct PlainOption;

    impl MenuOption for PlainOption {
        fn redraw(&self, canvas: &mut Canvas<'_>) {
            canvas.write_row(0, "Plain");
        }
    }

    fn flat(labels: &[&str]) -> MenuTree {
        labels
            .iter()
            .fold(MenuTree::new(), |tree, label| tree.action(*label, || {}))
    }

    fn menu(tree: MenuTree) -> Menu<MockDisplay> {
        Menu::new(tree, MockDisplay::new(), ConfigStore::new())
    }

    fn selected(label: &str) -> String {
        row(&format!("{}{}", SELECTION_GLYPH, label))
    }

    fn unselected(label: &str) -> String {
        row(&format!(" {}", label))
    }

    #[test]
    fn test_down_and_up_cycle_back_to_start() {
        for size in 1..=5 {
            let labels: Vec<String> = (0..size).map(|i| format!("Item {i}")).collect();
            let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
            let mut menu = menu(flat(&refs));

            for _ in 0..size {
                menu.down();
            }
            assert_eq!(menu.position(), 0, "down x{size}");

            menu.down();
            let start = menu.position();
            for _ in 0..size {
                menu.up();
            }
            assert_eq!(menu.position(), start, "up x{size}");
        }
    }

    #[test]
    fn test_up_wraps_to_last_entry() {
        let mut menu = menu(flat(&["A", "B", "C"]));
        menu.up();
        assert_eq!(menu.position(), 2);
        assert_eq!(menu.current_label(), Some("C"));
    }

    #[test]
    fn test_select_then_left_restores_position_and_path() {
        let tree = MenuTree::new()
            .action("First", || {})
            .submenu("Settings", flat(&["Inner A", "Inner B"]))
            .action("Last", || {});
        let mut menu = menu(tree);
        menu.down();
        assert_eq!(menu.current_label(), Some("Settings"));
        let path_before = menu.path().to_vec();

        menu.select();
        assert_eq!(menu.path(), &[1]);
        assert_eq!(menu.position(), 0);
        assert_eq!(menu.current_label(), Some("Inner A"));

        menu.left();
        assert_eq!(menu.path(), path_before.as_slice());
        assert_eq!(menu.position(), 1);
        assert_eq!(menu.mode(), Mode::Navigate);
    }

    #[test]
    fn test_right_descends_like_select() {
        let tree = MenuTree::new().submenu("Sub", flat(&["X"]));
        let mut menu = menu(tree);
        menu.right();
        assert_eq!(menu.path(), &[0]);
        assert_eq!(menu.current_label(), Some("X"));
    }

    #[test]
    fn test_left_at_root_is_noop() {
        let mut menu = menu(flat(&["A", "B"]));
        menu.down();
        menu.left();
        assert_eq!(menu.position(), 1);
        assert!(menu.path().is_empty());
    }

    #[test]
    fn test_action_runs_and_stays_in_navigate() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let tree = MenuTree::new().action("Run", move || counter.set(counter.get() + 1));
        let mut menu = menu(tree);

        menu.select();
        menu.right();
        assert_eq!(count.get(), 2);
        assert_eq!(menu.mode(), Mode::Navigate);
    }

    #[test]
    fn test_option_enters_adjust_and_select_leaves() {
        let tree = MenuTree::new().option("Contrast", ContrastOption::new());
        let mut menu = menu(tree);

        menu.select();
        assert_eq!(menu.mode(), Mode::Adjust);
        menu.select();
        assert_eq!(menu.mode(), Mode::Navigate);
    }

    #[test]
    fn test_contrast_left_never_leaves_adjust() {
        let tree = MenuTree::new().option("Contrast", ContrastOption::new());
        let mut menu = menu(tree);
        menu.select();

        menu.left();
        menu.left();
        assert_eq!(menu.mode(), Mode::Adjust);
        assert_eq!(menu.config().get("Display", "contrast"), Some("38"));
        assert_eq!(menu.display().contrast, Some(38));
    }

    #[test]
    fn test_color_left_cycles_channels_without_leaving() {
        let tree = MenuTree::new().option("Backlight", ColorOption::new(RecordingBacklight::default()));
        let mut menu = menu(tree);
        menu.select();
        for _ in 0..7 {
            menu.left();
        }
        assert_eq!(menu.mode(), Mode::Adjust);
    }

    #[test]
    fn test_default_option_left_leaves_adjust() {
        let tree = MenuTree::new().option("Plain", PlainOption);
        let mut menu = menu(tree);
        menu.select();
        menu.up();
        menu.right();
        assert_eq!(menu.mode(), Mode::Adjust);

        menu.left();
        assert_eq!(menu.mode(), Mode::Navigate);
    }

    #[test]
    fn test_adjust_forwards_up_down_right() {
        let tree = MenuTree::new().option("Contrast", ContrastOption::new());
        let mut menu = menu(tree);
        menu.select();

        menu.up();
        menu.up();
        menu.down();
        menu.right();
        assert_eq!(menu.config().get("Display", "contrast"), Some("42"));
        assert_eq!(menu.position(), 0);
    }

    #[test]
    fn test_handle_dispatches_commands() {
        let tree = MenuTree::new()
            .action("A", || {})
            .submenu("B", flat(&["B1", "B2"]));
        let mut menu = menu(tree);

        menu.handle(Command::Down);
        menu.handle(Command::Select);
        menu.handle(Command::Down);
        assert_eq!(menu.current_label(), Some("B2"));

        menu.handle(Command::Left);
        assert_eq!(menu.current_label(), Some("B"));
        menu.handle(Command::Up);
        assert_eq!(menu.current_label(), Some("A"));
        menu.handle(Command::Right);
        assert!(menu.path().is_empty());
    }

    #[test]
    fn test_command_names() {
        for command in Command::ALL {
            assert_eq!(Command::parse_from_str(command.as_str()), Some(command));
        }
        assert_eq!(Command::parse_from_str("cancel"), None);
    }

    #[test]
    fn test_redraw_three_items_centers_selection() {
        let mut menu = menu(flat(&["Alpha", "Beta", "Gamma"]));
        menu.redraw();

        let display = menu.display();
        assert_eq!(display.row(0), unselected("Gamma"));
        assert_eq!(display.row(1), selected("Alpha"));
        assert_eq!(display.row(2), unselected("Beta"));
    }

    #[test]
    fn test_redraw_two_items_blanks_top_row() {
        let mut menu = menu(flat(&["Alpha", "Beta"]));
        menu.down();
        menu.redraw();

        let display = menu.display();
        assert_eq!(display.row(0), row(""));
        assert_eq!(display.row(1), selected("Beta"));
        assert_eq!(display.row(2), unselected("Alpha"));
    }

    #[test]
    fn test_redraw_single_item_blanks_outer_rows() {
        let mut menu = menu(flat(&["Only"]));
        menu.redraw();

        let display = menu.display();
        assert_eq!(display.row(0), row(""));
        assert_eq!(display.row(1), selected("Only"));
        assert_eq!(display.row(2), row(""));
    }

    #[test]
    fn test_redraw_truncates_long_labels() {
        let mut menu = menu(flat(&["A very long menu label"]));
        menu.redraw();
        assert_eq!(menu.display().row(1), format!("{}A very long men", SELECTION_GLYPH));
    }

    #[test]
    fn test_empty_submenu_is_harmless() {
        let tree = MenuTree::new().submenu("Empty", MenuTree::new());
        let mut menu = menu(tree);
        menu.select();
        assert_eq!(menu.path(), &[0]);

        menu.up();
        menu.down();
        menu.select();
        assert_eq!(menu.position(), 0);
        assert_eq!(menu.mode(), Mode::Navigate);

        menu.redraw();
        for r in 0..3 {
            assert_eq!(menu.display().row(r), row(""));
        }

        menu.left();
        assert!(menu.path().is_empty());
        assert_eq!(menu.current_label(), Some("Empty"));
    }

    #[test]
    fn test_redraw_in_adjust_delegates_to_option() {
        let tree = MenuTree::new()
            .action("Other", || {})
            .option("Screen", ContrastOption::new());
        let mut menu = menu(tree);
        menu.down();
        menu.select();
        menu.redraw();

        let display = menu.display();
        assert_eq!(display.row(0), row("Contrast"));
        assert_eq!(display.row(1), row("Value: 40"));
        assert_eq!(display.row(2), row(""));
    }

    #[test]
    fn test_new_sets_up_nested_options() {
        let backlight = RecordingBacklight::default();
        let tree = MenuTree::new().submenu(
            "Settings",
            MenuTree::new()
                .option("Backlight", ColorOption::new(backlight.clone()))
                .submenu("Display", MenuTree::new().option("Contrast", ContrastOption::new())),
        );
        let menu = menu(tree);

        assert_eq!(menu.config().get("Display", "contrast"), Some("40"));
        assert_eq!(menu.config().get("Backlight", "v"), Some("100"));
        assert_eq!(menu.display().contrast, Some(40));
        assert_eq!(backlight.last(), Some((255, 255, 255)));
    }

    #[test]
    fn test_insert_existing_label_keeps_position() {
        let mut tree = flat(&["A", "B", "C"]);
        tree.insert("B", MenuEntry::Submenu(MenuTree::new()));

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.position("B"), Some(1));
        assert!(tree.get("B").is_some_and(MenuEntry::is_submenu));
        assert_eq!(tree.label(2), Some("C"));
    }

    #[test]
    fn test_entry_kinds_and_lookup_by_label() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let mut tree = MenuTree::new()
            .action("Run", move || counter.set(counter.get() + 1))
            .option("Contrast", ContrastOption::new())
            .submenu("More", MenuTree::new());

        assert!(tree.get("Run").is_some_and(MenuEntry::is_action));
        assert!(tree.get("Contrast").is_some_and(MenuEntry::is_option));
        assert!(!tree.get("More").is_some_and(MenuEntry::is_option));
        assert!(tree.get("Missing").is_none());

        if let Some(MenuEntry::Action(action)) = tree.get_mut("Run") {
            action();
        }
        assert_eq!(count.get(), 1);
        assert!(tree.get_mut("Missing").is_none());
    }

    #[test]
    fn test_rows_reach_display_as_fixed_width_chars() {
        let mut menu = menu(flat(&["Alpha", "Beta", "Gamma"]));
        menu.display_mut().writes.clear();
        menu.redraw();

        let writes = &menu.display().writes;
        assert_eq!(writes.len(), 3);
        for text in writes {
            assert_eq!(text.chars().count(), ROW_WIDTH, "{text:?}");
        }
        let glyph = writes[0].chars().next().unwrap();
        assert_eq!(glyph, SELECTION_GLYPH);
        assert_eq!(u32::from(glyph), 252);
    }

    #[test]
    fn test_option_context_drives_option_outside_menu() {
        let mut config = ConfigStore::new();
        let mut display = MockDisplay::new();
        let mut option = PlainOption;
        let mut ctx = OptionContext {
            config: &mut config,
            display: &mut display,
        };
        assert!(option.select(&mut ctx));
        assert!(!option.left(&mut ctx));
    }
}
