use serde_json::{Map, Value};

use crate::engine::definitions::{Board, Player, Seeds, Stores, Variant};
use crate::engine::evaluator::suggest_move;
use crate::hint_server::definitions::*;

/// Full `/suggest-move` pipeline for an already decoded JSON body.
pub fn suggest(body: &Value) -> Result<HintResponse, HintError> {
    let request = parse_request(body)?;
    trace!("Parsed hint request: {:?}", request);
    let suggestion = suggest_move(
        &request.board,
        request.player,
        request.variant,
        request.stores,
    )
    .map_err(|err| HintError::Internal(err.to_string()))?
    .ok_or(HintError::NoValidMoves)?;
    Ok(suggestion.into())
}

pub fn parse_request(body: &Value) -> Result<HintRequest, HintError> {
    let fields = body.as_object().ok_or(HintError::NotAnObject)?;
    if let Some(missing) = REQUIRED_FIELDS
        .into_iter()
        .find(|field| !fields.contains_key(*field))
    {
        return Err(HintError::MissingField(missing));
    }

    Ok(HintRequest {
        board: parse_board(&fields["board"])?,
        player: parse_player(&fields["currentPlayer"])?,
        variant: parse_variant(&fields["variant"])?,
        stores: parse_stores(fields)?,
    })
}

fn parse_board(value: &Value) -> Result<Board, HintError> {
    match value.as_array() {
        Some(rows) if rows.len() >= 2 => {}
        _ => return Err(HintError::InvalidBoard),
    }
    serde_json::from_value::<Vec<Vec<Seeds>>>(value.clone())
        .map(Board::new)
        .map_err(|_| HintError::InvalidBoard)
}

fn parse_player(value: &Value) -> Result<Player, HintError> {
    value
        .as_i64()
        .and_then(|index| Player::try_from(index).ok())
        .ok_or(HintError::InvalidPlayer)
}

fn parse_variant(value: &Value) -> Result<Variant, HintError> {
    match value.as_str() {
        Some(name) => name
            .parse()
            .map_err(|_| HintError::InvalidVariant(name.to_owned())),
        None => Err(HintError::InvalidVariant(value.to_string())),
    }
}

fn parse_stores(fields: &Map<String, Value>) -> Result<Stores, HintError> {
    match fields.get("stores") {
        None | Some(Value::Null) => Ok(Stores::default()),
        Some(value) => serde_json::from_value::<[Seeds; 2]>(value.clone())
            .map(Stores)
            .map_err(|_| HintError::InvalidStores),
    }
}
