use super::*;
use std::cmp::Ordering;

/// Decides a game from the two revealed cards and the rule in force.
///
/// Total and deterministic over valid cards; never returns
/// [`Outcome::Pending`].
pub fn determine(attacker: Card, defender: Card, rule: Rule) -> Outcome {
    match rule.compare(attacker, defender) {
        Ordering::Greater => Outcome::AttackerWin,
        Ordering::Less => Outcome::DefenderWin,
        Ordering::Equal => Outcome::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(n: u8) -> Card {
        Card::try_from(n).unwrap()
    }

    fn rules() -> Vec<Rule> {
        Card::all()
            .map(|c| Rule::Closest(u8::from(c)))
            .chain([Rule::Higher, Rule::Lower, Rule::Closest(0), Rule::Closest(20)])
            .collect()
    }

    #[test]
    fn higher_wins_seven_over_three() {
        assert!(determine(card(7), card(3), Rule::Higher) == Outcome::AttackerWin);
        assert!(determine(card(3), card(7), Rule::Higher) == Outcome::DefenderWin);
    }

    #[test]
    fn lower_wins_inverts_higher() {
        assert!(determine(card(7), card(3), Rule::Lower) == Outcome::DefenderWin);
        assert!(determine(card(3), card(7), Rule::Lower) == Outcome::AttackerWin);
    }

    #[test]
    fn closest_measures_distance() {
        assert!(determine(card(4), card(9), Rule::Closest(5)) == Outcome::AttackerWin);
        assert!(determine(card(1), card(6), Rule::Closest(5)) == Outcome::DefenderWin);
        assert!(determine(card(4), card(6), Rule::Closest(5)) == Outcome::Draw);
    }

    #[test]
    fn equal_cards_always_draw() {
        assert!(rules()
            .into_iter()
            .all(|rule| Card::all().all(|c| determine(c, c, rule) == Outcome::Draw)));
    }

    #[test]
    fn total_and_deterministic() {
        for rule in rules() {
            for a in Card::all() {
                for d in Card::all() {
                    let outcome = determine(a, d, rule);
                    assert!(outcome.finished());
                    assert!(outcome == determine(a, d, rule));
                }
            }
        }
    }

    #[test]
    fn swapping_seats_swaps_winners() {
        for rule in rules() {
            for a in Card::all() {
                for d in Card::all() {
                    let swapped = match determine(d, a, rule) {
                        Outcome::AttackerWin => Outcome::DefenderWin,
                        Outcome::DefenderWin => Outcome::AttackerWin,
                        other => other,
                    };
                    assert!(determine(a, d, rule) == swapped);
                }
            }
        }
    }
}
