//! Unified calculator driver
//!
//! Scenarios are written once against [`CalculatorDriver`]
//! and run against both the bare [`Controller`] and the terminal app.

use crate::controller::{Controller, Transition};

/// Anything that accepts button presses and shows a display
///
/// # Example
///
/// ```rust
/// use cool_calc::driver::{verify_chaining, CalculatorDriver};
/// use cool_calc::controller::Controller;
///
/// let mut driver = Controller::new();
/// verify_chaining(&mut driver);
/// assert_eq!(driver.display(), "6");
/// ```
pub trait CalculatorDriver {
    /// Presses a single button label
    fn press(&mut self, label: char) -> Transition;

    /// Gets the current display string
    fn display(&self) -> String;

    /// Gets the current expression buffer
    fn buffer(&self) -> String;

    /// Presses each non-whitespace label in order
    fn press_sequence(&mut self, labels: &str) {
        for label in labels.chars().filter(|c| !c.is_whitespace()) {
            self.press(label);
        }
    }
}

impl CalculatorDriver for Controller {
    fn press(&mut self, label: char) -> Transition {
        Self::press(self, label)
    }

    fn display(&self) -> String {
        Self::display(self).to_string()
    }

    fn buffer(&self) -> String {
        Self::buffer(self).to_string()
    }
}

/// Starts each scenario from a blank state
fn reset<D: CalculatorDriver>(driver: &mut D) {
    driver.press('C');
    assert_eq!(driver.display(), "");
}

/// `1 2 + 3 =` shows `15`
pub fn verify_multi_digit_addition<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.press_sequence("1 2 + 3");
    assert_eq!(driver.display(), "12+3");
    driver.press('=');
    assert_eq!(driver.display(), "15");
}

/// `7 * 6 =` shows `42`
pub fn verify_multiplication<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.press_sequence("7 * 6 =");
    assert_eq!(driver.display(), "42");
}

/// `9 / 0 =` shows `Error` and empties the buffer
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.press_sequence("9 / 0 =");
    assert_eq!(driver.display(), "Error");
    assert_eq!(driver.buffer(), "");
}

/// `5 + C 2 =` shows `2`
pub fn verify_clear_discards_partial<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.press_sequence("5 + C");
    assert_eq!(driver.display(), "");
    assert_eq!(driver.buffer(), "");
    driver.press_sequence("2 =");
    assert_eq!(driver.display(), "2");
}

/// `4 - 1 = * 2 =` shows `6`
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.press_sequence("4 - 1 =");
    assert_eq!(driver.display(), "3");
    assert_eq!(driver.buffer(), "3");
    driver.press_sequence("* 2 =");
    assert_eq!(driver.display(), "6");
}

/// `=` on an empty buffer shows `Error`
pub fn verify_equals_on_empty<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    driver.press('=');
    assert_eq!(driver.display(), "Error");
}

/// Runs every scenario in sequence on the same driver
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_multi_digit_addition(driver);
    verify_multiplication(driver);
    verify_division_by_zero(driver);
    verify_clear_discards_partial(driver);
    verify_chaining(driver);
    verify_equals_on_empty(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_driver_press() {
        let mut driver = Controller::new();
        assert_eq!(
            CalculatorDriver::press(&mut driver, '7'),
            Transition::Appended('7')
        );
        assert_eq!(CalculatorDriver::display(&driver), "7");
        assert_eq!(CalculatorDriver::buffer(&driver), "7");
    }

    #[test]
    fn test_press_sequence_ignores_spaces() {
        let mut driver = Controller::new();
        driver.press_sequence(" 1  + 1 ");
        assert_eq!(CalculatorDriver::buffer(&driver), "1+1");
    }

    #[test]
    fn test_unified_multi_digit_addition() {
        verify_multi_digit_addition(&mut Controller::new());
    }

    #[test]
    fn test_unified_multiplication() {
        verify_multiplication(&mut Controller::new());
    }

    #[test]
    fn test_unified_division_by_zero() {
        verify_division_by_zero(&mut Controller::new());
    }

    #[test]
    fn test_unified_clear() {
        verify_clear_discards_partial(&mut Controller::new());
    }

    #[test]
    fn test_unified_chaining() {
        verify_chaining(&mut Controller::new());
    }

    #[test]
    fn test_unified_equals_on_empty() {
        verify_equals_on_empty(&mut Controller::new());
    }

    #[test]
    fn test_all_scenarios() {
        let mut driver = Controller::new();
        run_all_scenarios(&mut driver);
    }
}
