use jni::objects::{JClass, JString};
use jni::sys::{jint, jlong, jstring};
use jni::JNIEnv;
use risiko_engine::{
    simulate, CombatController, DiceCount, SimulationRequest, Slot,
};
use serde_json::{json, Value};

fn respond(env: &JNIEnv, payload: Value) -> jstring {
    match env.new_string(payload.to_string()) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

fn ok(env: &JNIEnv, value: Value) -> jstring {
    respond(env, json!({ "ok": true, "result": value }))
}

fn err(env: &JNIEnv, e: impl std::fmt::Display) -> jstring {
    respond(env, json!({ "ok": false, "error": e.to_string() }))
}

fn dice_count(n: jint) -> Result<DiceCount, String> {
    let n = u8::try_from(n).map_err(|_| format!("dice count {} is outside 1..=3", n))?;
    DiceCount::try_from(n).map_err(|e| e.to_string())
}

/// Board for a fresh session seeded with `seed`, at epoch 0.
pub fn roll_board(seed: i64, attackers: i32, defenders: i32) -> Result<Value, String> {
    let ctl = CombatController::with_counts(
        risiko_engine::Dice::from_seed(seed as u64),
        dice_count(attackers)?,
        dice_count(defenders)?,
    );
    serde_json::to_value(ctl.board()).map_err(|e| e.to_string())
}

/// Count after tapping `slot`, or -1 if either input is out of range.
pub fn toggle_count(current: i32, slot: i32) -> i32 {
    let Ok(current) = dice_count(current) else {
        return -1;
    };
    let Some(slot) = usize::try_from(slot).ok().and_then(|s| Slot::new(s).ok()) else {
        return -1;
    };
    current.toggled(slot).get() as i32
}

pub fn simulate_json(input: &str) -> Result<Value, String> {
    let req: SimulationRequest =
        serde_json::from_str(input).map_err(|e| format!("invalid_config: {}", e))?;
    serde_json::to_value(simulate(&req)).map_err(|e| e.to_string())
}

#[no_mangle]
pub extern "system" fn Java_com_risiko_Ffi_version<'local>(
    env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> jstring {
    match env.new_string(concat!("risiko-ffi ", env!("CARGO_PKG_VERSION"))) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "system" fn Java_com_risiko_Ffi_rollBoardJson(
    env: JNIEnv,
    _class: JClass,
    seed: jlong,
    attackers: jint,
    defenders: jint,
) -> jstring {
    match roll_board(seed, attackers, defenders) {
        Ok(board) => ok(&env, board),
        Err(e) => err(&env, e),
    }
}

#[no_mangle]
pub extern "system" fn Java_com_risiko_Ffi_toggleCount(
    _env: JNIEnv,
    _class: JClass,
    current: jint,
    slot: jint,
) -> jint {
    toggle_count(current, slot)
}

#[no_mangle]
pub extern "system" fn Java_com_risiko_Ffi_simulateJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
) -> jstring {
    let input: String = match env.get_string(&json) {
        Ok(s) => s.into(),
        Err(e) => return err(&env, e),
    };
    match simulate_json(&input) {
        Ok(stats) => ok(&env, stats),
        Err(e) => err(&env, e),
    }
}
