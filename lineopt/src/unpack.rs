use lineopt_parser::{ArityError, ParseState};

use crate::{result::Value, schema::Arity};

/**
Split the tokens left in `state` between positional arguments with the given
arities, in order:

- [`Arity::Exactly`] takes that many tokens; a single value for an arity of 1,
  otherwise a list.
- [`Arity::Rest`] takes every remaining token, as a (possibly empty) list.
- [`Arity::Trailer`] takes the rest of the line verbatim, as a single value.
  After a trailer, nothing is left in `state`.

Tokens not consumed by any arity stay in `state`. Fails if the tokens run out
before an [`Arity::Exactly`] is satisfied.

```
use lineopt::{Arity, ParseState, Value, unpack_args};

let mut state = ParseState::new("#rust hello   world");
let values = unpack_args(&mut state, [Arity::ONE, Arity::Trailer]).unwrap();

assert_eq!(values, [Value::from("#rust"), Value::from("hello   world")]);
```
*/
pub fn unpack_args<'line>(
    state: &mut ParseState<'line>,
    arities: impl IntoIterator<Item = Arity>,
) -> Result<Vec<Value<'line>>, ArityError> {
    arities
        .into_iter()
        .map(|arity| {
            Ok(match arity {
                Arity::Exactly(count) => Value::fixed(state.pop_fixed(count.get())?),
                Arity::Rest => Value::Multiple(state.pop_rest()),
                Arity::Trailer => Value::Single(state.pop_trailer()),
            })
        })
        .collect()
}
