use std::io::Cursor;

use entity_store::errors::RegistryError;
use entity_store::gameworld::{display_name, registered_count, Name, Component};
use entity_store::menu::Menu;

// Kept in its own test binary: clearing the process-wide registry would race
// with any other test that lists component names.
#[test]
fn clearing_the_registry_unregisters_until_next_add() {
    let script = "1\n6\n4\n1\n4\n0\n";
    let mut menu = Menu::new(Cursor::new(script), Vec::new()).with_bulk_count(1);
    menu.run().unwrap();

    let output = String::from_utf8(menu.into_output()).unwrap();
    let after_clear = output.find("<unregistered>").expect("listing after clear");
    let relisted = output.rfind("0: Entity:\n").unwrap();
    assert!(after_clear < relisted);
    assert!(output[relisted..].contains(Name::NAME));

    assert!(registered_count() >= 3);
    assert_eq!(display_name(Name::ID), Ok("Name"));

    entity_store::gameworld::clear_registry();
    assert_eq!(registered_count(), 0);
    assert_eq!(display_name(Name::ID), Err(RegistryError::NotRegistered(Name::ID)));
}
