use hickory_proto::op::{Message, MessageType, ResponseCode};

/// Start a response to `request`: same id, opcode, RD and CD bits, and the
/// question copied over. Sections are left empty.
pub fn reply_to(request: &Message) -> Message {
    let mut reply = Message::new(request.id(), MessageType::Response, request.op_code());
    reply.set_recursion_desired(request.recursion_desired());
    reply.set_checking_disabled(request.checking_disabled());
    reply.set_authoritative(true);
    reply.set_response_code(ResponseCode::NoError);

    for query in request.queries() {
        reply.add_query(query.clone());
    }

    reply
}
