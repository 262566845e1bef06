//! Tests for stack manipulation words.

use rpn_lang::{Outcome, Value};

use super::{assert_stack_eq, assert_top_down_integers, eval, eval_ok};

// ============================================================================
// Basic manipulation
// ============================================================================

#[test]
fn over_drop_dropn_combination() {
    // OVER copies the second item, DROP removes it again, DROPN takes the
    // top two off the tail of pushed integers.
    let interp = eval_ok("CLEAR 12.32 3 OVER DROP 1 2 3 4 5 6 2 DROPN");
    assert_eq!(interp.stack().depth(), 6);
    assert_top_down_integers(&interp, &[4, 3, 2, 1, 3]);
    assert_eq!(interp.stack().peek_double(6), Ok(12.32));
}

#[test]
fn dup_increases_depth_and_preserves_top() {
    let interp = eval_ok("9988 DUP DUP");
    assert_eq!(interp.stack().depth(), 3);
    assert_top_down_integers(&interp, &[9988, 9988, 9988]);
}

#[test]
fn swap_is_an_involution() {
    assert_stack_eq("1 2 SWAP", &[Value::integer(2), Value::integer(1)]);
    assert_stack_eq("1 2 SWAP SWAP", &[Value::integer(1), Value::integer(2)]);
}

#[test]
fn depth_pushes_count() {
    let interp = eval_ok("10 20 30 DEPTH");
    assert_eq!(interp.stack().peek_integer(1), Ok(3));
    assert_eq!(interp.stack().depth(), 4);
}

#[test]
fn clear_empties_the_stack() {
    let interp = eval_ok("1 2 3 CLEAR");
    assert_eq!(interp.stack().depth(), 0);
}

#[test]
fn dupn_copies_a_block_in_order() {
    let interp = eval_ok("3 6 4 3 DUPN");
    assert_eq!(interp.stack().depth(), 6);
    assert_top_down_integers(&interp, &[4, 6, 3, 4, 6, 3]);
}

// ============================================================================
// Rolls and rotations
// ============================================================================

#[test]
fn rollu_rolls_the_bottom_to_the_top() {
    let interp = eval_ok("CLEAR 10 9 8 7 6 5 4 3 2 1 ROLLU ROLLU");
    assert_eq!(interp.stack().depth(), 10);
    assert_top_down_integers(&interp, &[9, 10, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn rolld_sends_the_top_to_the_bottom() {
    let interp = eval_ok("CLEAR 10 9 8 7 6 5 4 3 2 1 ROLLD ROLLD");
    assert_top_down_integers(&interp, &[3, 4, 5, 6, 7, 8, 9, 10, 1, 2]);
}

#[test]
fn rollu_then_rolld_is_the_identity() {
    let interp = eval_ok("CLEAR 4 3 2 1 ROLLU ROLLD");
    assert_top_down_integers(&interp, &[1, 2, 3, 4]);
}

#[test]
fn rotu_rotates_only_the_top_three() {
    let interp = eval_ok("CLEAR 10 9 8 7 6 5 4 3 2 1 ROTU");
    assert_top_down_integers(&interp, &[3, 1, 2, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn rotd_rotates_only_the_top_three() {
    let interp = eval_ok("CLEAR 10 9 8 7 6 5 4 3 2 1 ROTD");
    assert_top_down_integers(&interp, &[2, 3, 1, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn rollun_confines_the_roll_to_the_top_n() {
    let interp = eval_ok("CLEAR 10 9 8 7 6 5 4 3 2 1 5 ROLLUN");
    assert_eq!(interp.stack().depth(), 10);
    assert_top_down_integers(&interp, &[5, 1, 2, 3, 4, 6, 7, 8, 9, 10]);
}

#[test]
fn rolldn_confines_the_roll_to_the_top_n() {
    let interp = eval_ok("CLEAR 10 9 8 7 6 5 4 3 2 1 7 ROLLDN");
    assert_eq!(interp.stack().depth(), 10);
    assert_top_down_integers(&interp, &[2, 3, 4, 5, 6, 7, 1, 8, 9, 10]);
}

// ============================================================================
// Positional words
// ============================================================================

#[test]
fn nipn_removes_the_nth_item() {
    let interp = eval_ok("CLEAR 10 9 8 7 6 5 4 3 2 1 5 NIPN");
    assert_eq!(interp.stack().depth(), 9);
    assert_top_down_integers(&interp, &[1, 2, 3, 4, 6, 7, 8, 9, 10]);
}

#[test]
fn pick_copies_the_nth_item_to_the_top() {
    let interp = eval_ok("CLEAR 10 9 8 7 6 5 4 3 2 1 7 PICK");
    assert_eq!(interp.stack().depth(), 11);
    assert_top_down_integers(&interp, &[7, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn tuckn_inserts_a_copy_of_the_top() {
    let interp = eval_ok("CLEAR 10 9 8 7 6 5 4 3 2 1 5 TUCKN");
    assert_eq!(interp.stack().depth(), 11);
    assert_top_down_integers(&interp, &[1, 2, 3, 4, 1, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn reverse_and_reversen() {
    let interp = eval_ok("CLEAR 1 2 3 4 REVERSE");
    assert_top_down_integers(&interp, &[1, 2, 3, 4]);

    let interp = eval_ok("CLEAR 1 2 3 4 2 REVERSEN");
    assert_top_down_integers(&interp, &[3, 4, 2, 1]);
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn dropn_beyond_depth_is_a_param_error_and_leaves_the_stack() {
    let (interp, outcome) = eval("1 2 10 DROPN");
    assert_eq!(outcome, Outcome::ParamError);
    assert_eq!(interp.status(), "DROPN: stack underflow");
    // Untouched, count included.
    assert_top_down_integers(&interp, &[10, 2, 1]);
}

#[test]
fn counted_words_reject_a_non_integer_count() {
    let (interp, outcome) = eval("1 2 3.5 DROPN");
    assert_eq!(outcome, Outcome::ParamError);
    assert_eq!(interp.status(), "DROPN: type error");
    assert_eq!(interp.stack().depth(), 3);
}

#[test]
fn rolls_underflow_on_too_shallow_stacks() {
    let (interp, outcome) = eval("1 ROLLU");
    assert_eq!(outcome, Outcome::ParamError);
    assert_eq!(interp.status(), "ROLLU: stack underflow");
    assert_eq!(interp.stack().depth(), 1);

    let (_, outcome) = eval("1 2 ROTU");
    assert_eq!(outcome, Outcome::ParamError);
}
