//! Every value has one owner. Borrowing lends it out without giving it away.

use std::rc::Rc;

use crate::koan::*;

fn test_clone_makes_a_copy() -> KoanResult {
    let original = String::from("mountain");
    let mut copy = original.clone();
    copy.push('s');

    // What is the original now? "mountain"
    assert_equal(__()?, original.as_str())?;
    // What is the copy now? "mountains"
    assert_equal(__()?, copy.as_str())
}

fn test_copy_types() -> KoanResult {
    let a = 5;
    let mut b = a;
    b += 1;

    // What is a after changing b? 5
    assert_equal(__()?, a)?;
    // What is b? 6
    assert_equal(__()?, b)
}

fn test_borrowing() -> KoanResult {
    fn length(text: &str) -> usize {
        text.len()
    }
    let text = String::from("river");
    let n = length(&text);

    // What is the length? 5
    assert_equal(__()?, n)?;
    // Is the text still usable after lending it out? true
    assert_equal(__()?, !text.is_empty())
}

fn test_mutable_borrow() -> KoanResult {
    fn add_stone(garden: &mut Vec<&'static str>) {
        garden.push("stone");
    }
    let mut garden = vec!["moss"];
    add_stone(&mut garden);

    // What does the garden hold? vec!["moss", "stone"]
    assert_equal(___()?, garden)
}

fn test_moves() -> KoanResult {
    let bowl = vec![1, 2, 3];
    let taken = bowl;

    // How many items were moved? 3
    assert_equal(__()?, taken.len())
}

fn test_rc_shares_ownership() -> KoanResult {
    let shared = Rc::new("tea");
    let other = Rc::clone(&shared);

    // How many owners does the tea have? 2
    assert_equal(__()?, Rc::strong_count(&other))
}

pub fn lesson() -> Lesson {
    Lesson::new("AboutOwnership", file!())
        .koan("test_clone_makes_a_copy", test_clone_makes_a_copy)
        .koan("test_copy_types", test_copy_types)
        .koan("test_borrowing", test_borrowing)
        .koan("test_mutable_borrow", test_mutable_borrow)
        .koan("test_moves", test_moves)
        .koan("test_rc_shares_ownership", test_rc_shares_ownership)
}
