use anyhow::{Context, Result};

use crate::circuits::{
    final_connection, largest_circuits_product, parse_junction_boxes, sorted_pairs, CONNECTIONS,
};
use crate::manifold::{Manifold, TimelineCounter};
use crate::Answer;

#[tracing::instrument(skip_all)]
pub fn day7(input: &str) -> Result<(Answer, Answer)> {
    let manifold = Manifold::parse(input);
    let start = manifold.start().context("no start cell 'S' in manifold")?;

    let splits = manifold.count_splits(start);
    let timelines = TimelineCounter::new(&manifold).count(start);

    Ok((splits.into(), timelines.into()))
}

#[tracing::instrument(skip_all)]
pub fn day8(input: &str) -> Result<(Answer, Answer)> {
    let boxes = parse_junction_boxes(input)?;
    let pairs = sorted_pairs(&boxes);
    tracing::debug!(boxes = boxes.len(), pairs = pairs.len());

    let part1 = largest_circuits_product(boxes.len(), &pairs, CONNECTIONS);

    // fewer than two boxes never need a final connection
    let part2 = final_connection(boxes.len(), &pairs)
        .map(|last| i128::from(boxes[last.i].x) * i128::from(boxes[last.j].x));

    Ok((part1.into(), part2.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputKind;

    use std::fmt::Display;

    use indoc::indoc;

    fn numbers(part1: i128, part2: i128) -> (Answer, Answer) {
        (Answer::Number(part1), Answer::Number(part2))
    }

    fn execute_day<S: Display, T: Display>(
        n: usize,
        f: fn(&str) -> Result<(S, T)>,
        input_kind: InputKind,
    ) -> Result<(S, T)> {
        f(&input_kind.load(n)?)
    }

    fn execute_day_input<I: ?Sized, S: Display, T: Display>(
        f: fn(&I) -> Result<(S, T)>,
        input: &I,
    ) -> Result<(S, T)> {
        f(input)
    }

    #[test]
    fn test_day7() -> Result<()> {
        let example = indoc! {"
            .......S.......
            ...............
            .......^.......
            ...............
            ......^.^......
            ...............
            .....^.^.^.....
            ...............
            ....^.^...^....
            ...............
            ...^.^...^.^...
            ...............
            ..^...^.....^..
            ...............
            .^.^.^.^.^...^.
            ...............
        "};
        assert_eq!(execute_day_input(day7, example)?, numbers(21, 40));
        assert_eq!(execute_day_input(day7, "S..\n.^.\n...\n")?, numbers(0, 1));
        assert_eq!(execute_day_input(day7, "S\n^\n.\n")?, numbers(1, 2));
        assert!(execute_day_input(day7, "...\n.^.\n").is_err());
        assert_eq!(execute_day(7, day7, InputKind::Example)?, numbers(21, 40));
        Ok(())
    }

    #[test]
    fn test_day8() -> Result<()> {
        let example = indoc! {"
            162,817,812
            57,618,57
            906,360,560
            592,479,940
            352,342,300
            466,668,158
            542,29,236
            431,825,988
            739,650,466
            52,470,668
            216,146,977
            819,987,18
            117,168,530
            805,96,715
            346,949,466
            970,615,88
            941,993,340
            862,61,35
            984,92,344
            425,690,689
        "};
        // all 190 pairs fit in the connection budget, leaving a single circuit of 20
        assert_eq!(execute_day_input(day8, example)?, numbers(20, 25272));
        assert_eq!(
            execute_day_input(day8, "0,0,0\n1,0,0\n10,10,10\n11,10,10\n")?,
            numbers(4, 10)
        );
        assert_eq!(
            execute_day_input(day8, "1,2,3\n")?,
            (Answer::Number(1), Answer::Missing)
        );
        assert_eq!(
            execute_day_input(day8, "")?,
            (Answer::Number(1), Answer::Missing)
        );
        assert_eq!(
            execute_day_input(day8, "5000000000,0,0\n5000000001,0,0\n")?,
            numbers(2, 25_000_000_005_000_000_000)
        );
        assert_eq!(
            execute_day_input(day8, "-3,0,0\n4,0,0\n")?,
            numbers(2, -12)
        );
        assert!(execute_day_input(day8, "1,2\n").is_err());
        assert_eq!(execute_day(8, day8, InputKind::Example)?, numbers(20, 25272));
        Ok(())
    }
}
