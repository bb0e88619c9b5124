/*
Implements:
 - reading set cover instances in the OR-Library "scp" format
 - reading and writing solutions (one selected set per line)

OR-Library format (whitespace separated):
    nb_rows nb_columns
    cost of each column
    for each row: number of columns covering it, followed by these columns (1-based)
Rows are the elements of the universe, columns are the candidate sets.
*/
use std::fs;

use nom::{IResult, Finish};
use nom::character::complete::{digit1, multispace0};
use nom::combinator::map_res;
use nom::multi::count;
use nom::number::complete::double;
use nom::sequence::{preceded, tuple};

use crate::{
    cover::{SetCoverInstance, Solution, SetId, selected_sets, solution_from_sets},
    errors::SetCoverError,
};

/// reads a non-negative integer (skipping leading whitespace)
fn integer(s:&str) -> IResult<&str, usize> {
    map_res(preceded(multispace0, digit1), |d:&str| d.parse::<usize>())(s)
}

/// reads a real number (skipping leading whitespace)
fn real(s:&str) -> IResult<&str, f64> {
    preceded(multispace0, double)(s)
}

/// reads header containing (nb_rows, nb_columns)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    tuple((integer, integer))(s)
}

/// reads a row: the number of columns covering it, then the column list
pub fn read_row(s:&str) -> IResult<&str, Vec<usize>> {
    let (remaining, k) = integer(s)?;
    count(integer, k)(remaining)
}

/// reads a whole scp file content, returns (nb_rows, nb_columns, costs, rows)
pub fn read_scp(s:&str) -> IResult<&str, (usize, usize, Vec<f64>, Vec<Vec<usize>>)> {
    let (s, (nb_rows, nb_cols)) = read_header(s)?;
    let (s, costs) = count(real, nb_cols)(s)?;
    let (s, rows) = count(read_row, nb_rows)(s)?;
    let (s, _) = multispace0(s)?;
    Ok((s, (nb_rows, nb_cols, costs, rows)))
}

/// builds an instance from the content of an scp file
pub fn instance_from_str(content:&str) -> Result<SetCoverInstance, SetCoverError> {
    let (remaining, (nb_rows, nb_cols, costs, rows)) = read_scp(content)
        .finish()
        .map_err(|e| SetCoverError::Parse(format!(
            "{:?} at byte {}", e.code, content.len() - e.input.len()
        )))?;
    if !remaining.is_empty() {
        return Err(SetCoverError::Parse(format!(
            "unexpected content at byte {}", content.len() - remaining.len()
        )));
    }
    let mut sets = vec![Vec::new() ; nb_cols];
    for (e, row) in rows.iter().enumerate() {
        for col in row {
            if *col == 0 || *col > nb_cols {
                return Err(SetCoverError::Parse(format!(
                    "row {} refers to column {} (columns are numbered from 1 to {})", e+1, col, nb_cols
                )));
            }
            sets[col-1].push(e);
        }
    }
    SetCoverInstance::from_lists(nb_rows, &sets, costs)
}

/// reads an instance from an OR-Library file
pub fn read_instance(filename:&str) -> Result<SetCoverInstance, SetCoverError> {
    let content = fs::read_to_string(filename)?.replace("\r", "");
    instance_from_str(&content)
}

/** writes a string encoding the solution (one selected set per line) */
pub fn solution_to_string(solution:&[bool]) -> String {
    let mut res = String::default();
    for s in selected_sets(solution) {
        res += format!("{}\n", s).as_str();
    }
    res
}

/// parses a solution (one selected set per line, blank lines ignored)
pub fn solution_from_str(content:&str, nb_sets:usize) -> Result<Solution, SetCoverError> {
    let mut selected:Vec<SetId> = Vec::new();
    for (i,line) in content.lines().enumerate().filter(|(_,l)| !l.trim().is_empty()) {
        let s = line.trim().parse::<SetId>().map_err(|e| SetCoverError::Parse(
            format!("line {}: {}", i+1, e)
        ))?;
        if s >= nb_sets {
            return Err(SetCoverError::Parse(format!(
                "line {}: set {} does not exist ({} sets)", i+1, s, nb_sets
            )));
        }
        selected.push(s);
    }
    Ok(solution_from_sets(nb_sets, &selected))
}

/// writes a solution into a file
pub fn write_solution(filename:&str, solution:&[bool]) -> Result<(), SetCoverError> {
    fs::write(filename, solution_to_string(solution))?;
    Ok(())
}

/// reads a solution from a file
pub fn read_solution(filename:&str, nb_sets:usize) -> Result<Solution, SetCoverError> {
    solution_from_str(&fs::read_to_string(filename)?, nb_sets)
}


#[cfg(test)]
mod tests {
    use super::*;

    const SMALL:&str = "3 4\n 1 2 3 1\n2 1 4\n1 1\n 3 2 3\n4\n";

    #[test]
    fn test_read_header() {
        let (remaining, (r, c)) = read_header("3 4\n 1 2").unwrap();
        assert_eq!((r, c), (3, 4));
        assert_eq!(remaining, "\n 1 2");
    }

    #[test]
    fn test_read_row() {
        let (remaining, row) = read_row("\n3 2 3\n 4 next").unwrap();
        assert_eq!(row, vec![2, 3, 4]);
        assert_eq!(remaining, " next");
    }

    #[test]
    fn test_read_small_instance() {
        let inst = instance_from_str(SMALL).unwrap();
        assert_eq!(inst.nb_elements(), 3);
        assert_eq!(inst.nb_sets(), 4);
        assert_eq!(inst.costs(), &[1., 2., 3., 1.]);
        // element 0 covered by columns 1 and 4, element 2 by 2,3,4
        assert_eq!(inst.covering(0), &[0, 3]);
        assert_eq!(inst.covering(1), &[0]);
        assert_eq!(inst.covering(2), &[1, 2, 3]);
        assert!(inst.is_valid(&[true, false, false, true]));
    }

    #[test]
    fn test_read_errors() {
        assert!(instance_from_str("2 2\n1 1\n1 3\n1 1\n").is_err()); // column 3 does not exist
        assert!(instance_from_str("2 2\n1 1\n1 1\n").is_err()); // missing row
        assert!(instance_from_str("1 1\n1\n1 1\nfoo").is_err()); // trailing garbage
    }

    #[test]
    fn test_solution_strings() {
        let sol = vec![true, false, false, true];
        let s = solution_to_string(&sol);
        assert_eq!(s, "0\n3\n");
        assert_eq!(solution_from_str(&s, 4).unwrap(), sol);
        assert!(solution_from_str("5\n", 4).is_err());
        assert!(solution_from_str("a\n", 4).is_err());
    }
}
